use super::{Claim, ExternalAssertion, ExternalLogin, IdentityError, UserAccount};

/// Result of an external sign-in attempt. `is_blocked` marks sign-ins that
/// were explicitly disallowed by policy (e.g. unconfirmed email on a linked
/// account), as opposed to a plain no-match failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignInOutcome {
    pub succeeded: bool,
    pub is_blocked: bool,
    pub account_id: Option<String>,
}

/// Directive telling the caller where to send the user for the external
/// provider's consent flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeDirective {
    pub provider: String,
    pub location: String,
}

// The collaborator owning user storage and credential verification. Each
// mutation is at-least single-record atomic; no cross-record transactions
// are assumed.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Option<UserAccount>;
    async fn find_by_id(&self, account_id: &str) -> Option<UserAccount>;
    async fn create_account(
        &mut self,
        username: &str,
        email: &str,
    ) -> Result<UserAccount, IdentityError>;
    async fn add_claim(&mut self, account_id: &str, claim: Claim) -> Result<(), IdentityError>;
    async fn add_external_login(
        &mut self,
        account_id: &str,
        login: ExternalLogin,
    ) -> Result<(), IdentityError>;
    async fn get_external_logins(&self, account_id: &str) -> Vec<ExternalLogin>;

    async fn sign_in(&mut self, account_id: &str, persistent: bool);
    async fn attempt_external_sign_in(
        &mut self,
        login_provider: &str,
        provider_key: &str,
        bypass_two_factor: bool,
    ) -> SignInOutcome;

    async fn get_authenticator_secret(&self, account_id: &str) -> Option<String>;
    async fn reset_authenticator_secret(
        &mut self,
        account_id: &str,
    ) -> Result<String, IdentityError>;
    async fn verify_totp_code(&self, account_id: &str, code: &str) -> bool;
    async fn set_two_factor_enabled(
        &mut self,
        account_id: &str,
        enabled: bool,
    ) -> Result<(), IdentityError>;
    async fn is_two_factor_client_remembered(&self, account_id: &str) -> bool;

    async fn count_recovery_codes(&self, account_id: &str) -> usize;
    async fn generate_recovery_codes(
        &mut self,
        account_id: &str,
        count: usize,
    ) -> Result<Vec<String>, IdentityError>;

    async fn generate_email_confirmation_token(
        &mut self,
        account_id: &str,
    ) -> Result<String, IdentityError>;
    async fn confirm_email(
        &mut self,
        account_id: &str,
        token: &str,
    ) -> Result<bool, IdentityError>;

    /// Consume the assertion staged by the consent round-trip, if any.
    async fn take_external_assertion(&mut self) -> Option<ExternalAssertion>;
    async fn begin_external_challenge(
        &self,
        provider: &str,
        redirect_path: &str,
    ) -> ChallengeDirective;
    async fn external_providers(&self) -> Vec<String>;
}
