use crate::app_state::AppState;
use crate::domain::{AccountDetails, AuthenticatorDetails, IdentityError, ResultVM, UserAccount};
use crate::errors::FlowError;
use crate::utils::{RECOVERY_CODE_COUNT, TOTP_DIGITS};

// Two-factor enrollment: Disabled -> SecretGenerated -> Verified.
// SecretGenerated is re-enterable (setup never regenerates an existing
// secret); Verified holds until an explicit reset.
pub struct TwoFactorEnrollment;

impl TwoFactorEnrollment {
    pub async fn details(state: AppState, account: &UserAccount) -> AccountDetails {
        let provider = state.identity_provider.read().await;
        let logins = provider.get_external_logins(&account.id).await;

        AccountDetails {
            username: account.username.clone(),
            email: account.email.to_string(),
            email_confirmed: account.email_confirmed,
            phone_number: account.phone_number.clone(),
            external_logins: logins
                .into_iter()
                .map(|login| login.provider_display_name)
                .collect(),
            two_factor_enabled: account.two_factor_enabled,
            has_authenticator: provider
                .get_authenticator_secret(&account.id)
                .await
                .is_some(),
            two_factor_client_remembered: provider
                .is_two_factor_client_remembered(&account.id)
                .await,
            recovery_codes_left: provider.count_recovery_codes(&account.id).await,
        }
    }

    pub async fn setup_authenticator(
        state: AppState,
        account: &UserAccount,
    ) -> Result<AuthenticatorDetails, FlowError> {
        let mut provider = state.identity_provider.write().await;
        let raw_secret = match provider.get_authenticator_secret(&account.id).await {
            Some(secret) => secret,
            None => provider
                .reset_authenticator_secret(&account.id)
                .await
                .map_err(provider_failure)?,
        };
        drop(provider);

        let issuer = state.config.read().await.issuer().to_owned();

        Ok(AuthenticatorDetails {
            shared_key: format_shared_key(&raw_secret),
            authenticator_uri: build_authenticator_uri(&issuer, account.email.as_ref(), &raw_secret),
        })
    }

    pub async fn verify_authenticator(
        state: AppState,
        account: &UserAccount,
        submitted_code: &str,
    ) -> Result<ResultVM, FlowError> {
        let code = submitted_code.replace([' ', '-'], "");

        let mut provider = state.identity_provider.write().await;
        if !provider.verify_totp_code(&account.id, &code).await {
            return Err(FlowError::InvalidCode);
        }

        provider
            .set_two_factor_enabled(&account.id, true)
            .await
            .map_err(provider_failure)?;

        let mut result = ResultVM::success("Your authenticator app has been verified");

        // Recovery codes are issued once, only while the account holds none.
        if provider.count_recovery_codes(&account.id).await == 0 {
            let recovery_codes = provider
                .generate_recovery_codes(&account.id, RECOVERY_CODE_COUNT)
                .await
                .map_err(provider_failure)?;
            result.data = Some(serde_json::json!({ "recoveryCodes": recovery_codes }));
        }

        Ok(result)
    }
}

fn provider_failure(err: IdentityError) -> FlowError {
    FlowError::Provider(vec![err.to_string()])
}

/// Cosmetic display form of the shared secret: 4-char groups separated by
/// single spaces (last group may be shorter), lowercased. Stripping spaces
/// and uppercasing restores the raw secret.
pub fn format_shared_key(raw_secret: &str) -> String {
    let chars: Vec<char> = raw_secret.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Inverse of [`format_shared_key`].
pub fn unformat_shared_key(display_key: &str) -> String {
    display_key.replace(' ', "").to_uppercase()
}

pub fn build_authenticator_uri(issuer: &str, email: &str, raw_secret: &str) -> String {
    format!(
        "otpauth://totp/{issuer}:{account}?secret={secret}&issuer={issuer}&digits={digits}",
        issuer = urlencoding::encode(issuer),
        account = urlencoding::encode(email),
        secret = raw_secret,
        digits = TOTP_DIGITS,
    )
}
