use std::collections::{HashMap, HashSet};

use rand::Rng;
use totp_rs::{Algorithm, Secret, TOTP};
use uuid::Uuid;

use crate::domain::{
    ChallengeDirective, Claim, Email, ExternalAssertion, ExternalLogin, IdentityError,
    IdentityProvider, SignInOutcome, UserAccount,
};
use crate::utils::{RECOVERY_CODE_LENGTH, TOTP_DIGITS, TOTP_SKEW_STEPS, TOTP_STEP_SECONDS};

// No 0/O/1/I, so users can read codes back without ambiguity.
const RECOVERY_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// In-memory identity provider. Backs the dev binary and the test suite;
/// a production deployment substitutes a real identity store behind the
/// same trait.
pub struct HashmapIdentityProvider {
    issuer: String,
    providers: Vec<String>,
    accounts: HashMap<String, UserAccount>,
    staged_assertion: Option<ExternalAssertion>,
    signed_in: Option<String>,
    remembered_clients: HashSet<String>,
    confirmation_tokens: HashMap<String, String>,
}

impl HashmapIdentityProvider {
    pub fn new(issuer: impl Into<String>, providers: Vec<String>) -> Self {
        HashmapIdentityProvider {
            issuer: issuer.into(),
            providers,
            accounts: HashMap::new(),
            staged_assertion: None,
            signed_in: None,
            remembered_clients: HashSet::new(),
            confirmation_tokens: HashMap::new(),
        }
    }

    pub fn add_account(&mut self, account: UserAccount) {
        self.accounts.insert(account.id.clone(), account);
    }

    /// Stage the assertion the next callback will consume, standing in for
    /// the consent round-trip with a real external provider.
    pub fn stage_assertion(&mut self, assertion: ExternalAssertion) {
        self.staged_assertion = Some(assertion);
    }

    pub fn signed_in_account(&self) -> Option<&str> {
        self.signed_in.as_deref()
    }

    pub fn remember_client(&mut self, account_id: &str) {
        self.remembered_clients.insert(account_id.to_string());
    }

    /// Current TOTP code for an enrolled account. Test helper only.
    pub fn current_totp_code(&self, account_id: &str) -> Option<String> {
        let account = self.accounts.get(account_id)?;
        let secret = account.authenticator_secret.as_deref()?;
        let totp = self.build_totp(secret, account.email.as_ref())?;
        totp.generate_current().ok()
    }

    fn account_mut(&mut self, account_id: &str) -> Result<&mut UserAccount, IdentityError> {
        self.accounts
            .get_mut(account_id)
            .ok_or_else(|| IdentityError::AccountNotFound(account_id.to_string()))
    }

    fn find_by_login(&self, login_provider: &str, provider_key: &str) -> Option<&UserAccount> {
        self.accounts.values().find(|account| {
            account.logins.iter().any(|login| {
                login.login_provider == login_provider && login.provider_key == provider_key
            })
        })
    }

    fn build_totp(&self, secret: &str, account_name: &str) -> Option<TOTP> {
        let secret_bytes = Secret::Encoded(secret.to_string()).to_bytes().ok()?;
        TOTP::new(
            Algorithm::SHA1,
            TOTP_DIGITS,
            TOTP_SKEW_STEPS,
            TOTP_STEP_SECONDS,
            secret_bytes,
            Some(self.issuer.clone()),
            account_name.to_string(),
        )
        .ok()
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HashmapIdentityProvider {
    async fn find_by_email(&self, email: &str) -> Option<UserAccount> {
        self.accounts
            .values()
            .find(|account| account.email.as_ref().eq_ignore_ascii_case(email))
            .cloned()
    }

    async fn find_by_id(&self, account_id: &str) -> Option<UserAccount> {
        self.accounts.get(account_id).cloned()
    }

    async fn create_account(
        &mut self,
        username: &str,
        email: &str,
    ) -> Result<UserAccount, IdentityError> {
        let parsed = Email::parse(email.to_string())
            .map_err(|_| IdentityError::InvalidEmail(email.to_string()))?;
        if self.find_by_email(email).await.is_some() {
            return Err(IdentityError::DuplicateEmail(email.to_string()));
        }
        if self
            .accounts
            .values()
            .any(|account| account.username == username)
        {
            return Err(IdentityError::DuplicateUsername(username.to_string()));
        }

        let account = UserAccount::new(username, parsed);
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    async fn add_claim(&mut self, account_id: &str, claim: Claim) -> Result<(), IdentityError> {
        self.account_mut(account_id)?.claims.push(claim);
        Ok(())
    }

    async fn add_external_login(
        &mut self,
        account_id: &str,
        login: ExternalLogin,
    ) -> Result<(), IdentityError> {
        // (provider, key) binds to at most one account store-wide.
        if self
            .find_by_login(&login.login_provider, &login.provider_key)
            .is_some()
        {
            return Err(IdentityError::LoginAlreadyLinked);
        }
        self.account_mut(account_id)?.logins.push(login);
        Ok(())
    }

    async fn get_external_logins(&self, account_id: &str) -> Vec<ExternalLogin> {
        self.accounts
            .get(account_id)
            .map(|account| account.logins.clone())
            .unwrap_or_default()
    }

    async fn sign_in(&mut self, account_id: &str, _persistent: bool) {
        self.signed_in = Some(account_id.to_string());
    }

    async fn attempt_external_sign_in(
        &mut self,
        login_provider: &str,
        provider_key: &str,
        bypass_two_factor: bool,
    ) -> SignInOutcome {
        let account = match self.find_by_login(login_provider, provider_key) {
            Some(account) => account.clone(),
            None => return SignInOutcome::default(),
        };

        if !account.email_confirmed {
            // Disallowed by policy, not merely unmatched.
            return SignInOutcome {
                succeeded: false,
                is_blocked: true,
                account_id: Some(account.id),
            };
        }
        if account.two_factor_enabled && !bypass_two_factor {
            return SignInOutcome {
                succeeded: false,
                is_blocked: false,
                account_id: Some(account.id),
            };
        }

        self.signed_in = Some(account.id.clone());
        SignInOutcome {
            succeeded: true,
            is_blocked: false,
            account_id: Some(account.id),
        }
    }

    async fn get_authenticator_secret(&self, account_id: &str) -> Option<String> {
        self.accounts
            .get(account_id)
            .and_then(|account| account.authenticator_secret.clone())
    }

    async fn reset_authenticator_secret(
        &mut self,
        account_id: &str,
    ) -> Result<String, IdentityError> {
        let secret = Secret::generate_secret().to_encoded().to_string();
        self.account_mut(account_id)?.authenticator_secret = Some(secret.clone());
        Ok(secret)
    }

    async fn verify_totp_code(&self, account_id: &str, code: &str) -> bool {
        let Some(account) = self.accounts.get(account_id) else {
            return false;
        };
        let Some(secret) = account.authenticator_secret.as_deref() else {
            return false;
        };
        let Some(totp) = self.build_totp(secret, account.email.as_ref()) else {
            return false;
        };
        totp.check_current(code).unwrap_or(false)
    }

    async fn set_two_factor_enabled(
        &mut self,
        account_id: &str,
        enabled: bool,
    ) -> Result<(), IdentityError> {
        self.account_mut(account_id)?.two_factor_enabled = enabled;
        Ok(())
    }

    async fn is_two_factor_client_remembered(&self, account_id: &str) -> bool {
        self.remembered_clients.contains(account_id)
    }

    async fn count_recovery_codes(&self, account_id: &str) -> usize {
        self.accounts
            .get(account_id)
            .map(|account| account.recovery_codes.len())
            .unwrap_or(0)
    }

    async fn generate_recovery_codes(
        &mut self,
        account_id: &str,
        count: usize,
    ) -> Result<Vec<String>, IdentityError> {
        let mut rng = rand::rng();
        let codes: Vec<String> = (0..count)
            .map(|_| {
                (0..RECOVERY_CODE_LENGTH)
                    .map(|_| {
                        RECOVERY_CODE_CHARSET[rng.random_range(0..RECOVERY_CODE_CHARSET.len())]
                            as char
                    })
                    .collect()
            })
            .collect();

        self.account_mut(account_id)?.recovery_codes = codes.clone();
        Ok(codes)
    }

    async fn generate_email_confirmation_token(
        &mut self,
        account_id: &str,
    ) -> Result<String, IdentityError> {
        self.account_mut(account_id)?;
        let token = Uuid::new_v4().to_string();
        self.confirmation_tokens
            .insert(account_id.to_string(), token.clone());
        Ok(token)
    }

    async fn confirm_email(
        &mut self,
        account_id: &str,
        token: &str,
    ) -> Result<bool, IdentityError> {
        if !self.accounts.contains_key(account_id) {
            return Err(IdentityError::AccountNotFound(account_id.to_string()));
        }
        let token_matches = self
            .confirmation_tokens
            .get(account_id)
            .is_some_and(|stored| stored == token);
        if !token_matches {
            return Ok(false);
        }

        self.confirmation_tokens.remove(account_id);
        self.account_mut(account_id)?.email_confirmed = true;
        Ok(true)
    }

    async fn take_external_assertion(&mut self) -> Option<ExternalAssertion> {
        self.staged_assertion.take()
    }

    async fn begin_external_challenge(
        &self,
        provider: &str,
        redirect_path: &str,
    ) -> ChallengeDirective {
        ChallengeDirective {
            provider: provider.to_string(),
            location: format!(
                "https://{}.example.com/oauth/authorize?redirect_uri={}",
                provider.to_lowercase(),
                urlencoding::encode(redirect_path)
            ),
        }
    }

    async fn external_providers(&self) -> Vec<String> {
        self.providers.clone()
    }
}
