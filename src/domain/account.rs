use uuid::Uuid;

use super::{Claim, Email, ExternalLogin};

/// Identity record owned by the identity provider. The flow services only
/// read and mutate it through the `IdentityProvider` contract.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub email: Email,
    pub email_confirmed: bool,
    pub phone_number: Option<String>,
    pub authenticator_secret: Option<String>,
    pub two_factor_enabled: bool,
    pub logins: Vec<ExternalLogin>,
    pub claims: Vec<Claim>,
    pub recovery_codes: Vec<String>,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, email: Email) -> Self {
        UserAccount {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email,
            email_confirmed: false,
            phone_number: None,
            authenticator_secret: None,
            two_factor_enabled: false,
            logins: Vec::new(),
            claims: Vec::new(),
            recovery_codes: Vec::new(),
        }
    }

    pub fn has_authenticator(&self) -> bool {
        self.authenticator_secret.is_some()
    }
}
