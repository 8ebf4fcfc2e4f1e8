use crate::app_state::AppState;
use crate::domain::{
    AssociateRequest, ChallengeDirective, Claim, ExternalLogin, ResultVM, UserAccount,
};
use crate::errors::FlowError;
use crate::utils::EXTERNAL_CALLBACK_PATH;
use crate::validation::{is_valid_email, is_valid_username};

/// Where the callback sends the user next, plus the account that was signed
/// in along the way (if any) so the route can bind the session.
#[derive(Debug, PartialEq, Eq)]
pub struct RedirectOutcome {
    pub location: String,
    pub signed_in: Option<String>,
}

impl RedirectOutcome {
    fn to(location: impl Into<String>) -> Self {
        RedirectOutcome {
            location: location.into(),
            signed_in: None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct AssociateOutcome {
    pub result: ResultVM,
    pub signed_in: Option<String>,
}

pub struct ExternalAccountAssociation;

impl ExternalAccountAssociation {
    /// Produce the consent-flow redirect for the chosen provider. Creates no
    /// local state; the return URL rides along as a callback query parameter.
    pub async fn begin_challenge(
        state: AppState,
        provider_name: &str,
        return_url: Option<&str>,
    ) -> ChallengeDirective {
        let callback_path = match return_url {
            Some(url) => format!(
                "{}?returnUrl={}",
                EXTERNAL_CALLBACK_PATH,
                urlencoding::encode(url)
            ),
            None => EXTERNAL_CALLBACK_PATH.to_string(),
        };

        state
            .identity_provider
            .read()
            .await
            .begin_external_challenge(provider_name, &callback_path)
            .await
    }

    pub async fn handle_callback(
        state: AppState,
        return_url: Option<String>,
        remote_error: Option<String>,
    ) -> RedirectOutcome {
        let return_url = return_url.unwrap_or_else(|| "/".to_string());

        if let Some(error) = remote_error {
            log::warn!("external provider returned an error: {}", error);
            return RedirectOutcome::to(return_url);
        }

        let mut provider = state.identity_provider.write().await;
        let assertion = match provider.take_external_assertion().await {
            Some(assertion) => assertion,
            None => return RedirectOutcome::to(return_url),
        };

        // Existing linked login: sign straight in. The external provider
        // already authenticated the user, so two-factor is bypassed here.
        let attempt = provider
            .attempt_external_sign_in(&assertion.login_provider, &assertion.provider_key, true)
            .await;
        if attempt.succeeded {
            return RedirectOutcome {
                location: return_url,
                signed_in: attempt.account_id,
            };
        }

        if let Some(account) = provider.find_by_email(&assertion.email).await {
            if attempt.is_blocked {
                // Sign-in was explicitly disallowed, not merely unmatched.
                return RedirectOutcome::to(format!(
                    "{}?message=Email ({}) confirmation is pending&type=danger",
                    return_url, assertion.email
                ));
            }

            let login = ExternalLogin::new(
                &assertion.login_provider,
                &assertion.provider_key,
                &assertion.provider_display_name,
            );
            if provider.add_external_login(&account.id, login).await.is_ok() {
                if account.email_confirmed {
                    provider.sign_in(&account.id, false).await;
                    return RedirectOutcome {
                        location: format!(
                            "{}?message={} has been added successfully",
                            return_url, assertion.provider_display_name
                        ),
                        signed_in: Some(account.id),
                    };
                }

                return RedirectOutcome::to(format!(
                    "{}?message={} has been added but email confirmation is pending",
                    return_url, assertion.provider_display_name
                ));
            }
        }

        // No matching account (or linking failed): hand off to the client's
        // registration flow with the pending association as query data.
        RedirectOutcome::to(format!(
            "/register?associate={}&loginProvider={}&providerDisplayName={}&providerKey={}",
            assertion.email,
            assertion.login_provider,
            assertion.provider_display_name,
            assertion.provider_key
        ))
    }

    pub async fn associate(
        state: AppState,
        request: AssociateRequest,
    ) -> Result<AssociateOutcome, FlowError> {
        if request.associate_existing_account {
            Self::send_association_confirmation(state, request).await
        } else {
            Self::create_and_link(state, request).await
        }
    }

    // New-account branch: the external provider already vouches for the
    // address, so the email is confirmed in place and no email is sent.
    async fn create_and_link(
        state: AppState,
        request: AssociateRequest,
    ) -> Result<AssociateOutcome, FlowError> {
        let mut messages = Vec::new();
        let username = request.username.clone().unwrap_or_default();
        let email = request.original_email.clone().unwrap_or_default();
        if !is_valid_username(&username) {
            messages.push("A valid username is required".to_string());
        }
        if !is_valid_email(&email) {
            messages.push("A valid email is required".to_string());
        }
        if !messages.is_empty() {
            return Err(FlowError::Validation(messages));
        }

        let mut provider = state.identity_provider.write().await;
        let account = provider
            .create_account(&username, &email)
            .await
            .map_err(provider_failure)?;

        provider
            .add_claim(&account.id, Claim::trial_started_now())
            .await
            .map_err(provider_failure)?;

        let login = ExternalLogin::new(
            &request.login_provider,
            &request.provider_key,
            &request.provider_display_name,
        );
        provider
            .add_external_login(&account.id, login)
            .await
            .map_err(provider_failure)?;

        provider.sign_in(&account.id, false).await;

        let token = provider
            .generate_email_confirmation_token(&account.id)
            .await
            .map_err(provider_failure)?;
        provider
            .confirm_email(&account.id, &token)
            .await
            .map_err(provider_failure)?;

        log::info!(
            "created account {} via external provider {}",
            account.username,
            request.login_provider
        );

        Ok(AssociateOutcome {
            result: ResultVM::success_with(
                format!("{} has been created successfully", account.username),
                serde_json::json!({ "username": account.username }),
            ),
            signed_in: Some(account.id),
        })
    }

    // Existing-account branch: linking into an account someone already owns
    // is higher-risk, so it is never finalized here. The owner has to follow
    // the emailed confirmation link.
    async fn send_association_confirmation(
        state: AppState,
        request: AssociateRequest,
    ) -> Result<AssociateOutcome, FlowError> {
        let email = request.associate_email.clone().unwrap_or_default();
        if !is_valid_email(&email) {
            return Err(FlowError::Validation(vec![
                "A valid email is required".to_string(),
            ]));
        }

        let account = {
            let provider = state.identity_provider.read().await;
            provider.find_by_email(&email).await
        }
        .ok_or_else(|| FlowError::NotFound(email.clone()))?;

        if !account.email_confirmed {
            return Err(FlowError::Validation(vec![
                format!(
                    "Associated account (<i>{}</i>) hasn't been confirmed yet.",
                    email
                ),
                "Confirm the account and try again".to_string(),
            ]));
        }

        let token = state
            .identity_provider
            .write()
            .await
            .generate_email_confirmation_token(&account.id)
            .await
            .map_err(provider_failure)?;

        let callback_url = build_confirmation_url(&state, &account, &token, &request).await;

        state
            .email_client
            .write()
            .await
            .send_email(
                account.email.as_ref(),
                &format!("Confirm {} external login", request.provider_display_name),
                &format!(
                    "Please confirm association of your {} account by <a href='{}'>clicking here</a>.",
                    request.provider_display_name, callback_url
                ),
            )
            .await
            .map_err(|err| FlowError::Provider(vec![err.to_string()]))?;

        Ok(AssociateOutcome {
            result: ResultVM::success(
                "External account association is pending. Please check your email",
            ),
            signed_in: None,
        })
    }
}

// The emailed link resumes the flow in a later request; everything it needs
// travels as explicit query data, never server-side session state.
async fn build_confirmation_url(
    state: &AppState,
    account: &UserAccount,
    token: &str,
    request: &AssociateRequest,
) -> String {
    let base_url = state.config.read().await.base_url().to_owned();
    format!(
        "{}/Account/ConfirmExternalProvider?userId={}&code={}&loginProvider={}&providerDisplayName={}&providerKey={}",
        base_url,
        urlencoding::encode(&account.id),
        urlencoding::encode(token),
        urlencoding::encode(&request.login_provider),
        urlencoding::encode(&request.provider_display_name),
        urlencoding::encode(&request.provider_key),
    )
}

fn provider_failure(err: crate::domain::IdentityError) -> FlowError {
    FlowError::Provider(vec![err.to_string()])
}
