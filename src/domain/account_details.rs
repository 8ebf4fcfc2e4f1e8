use serde::{Deserialize, Serialize};

/// Read-only snapshot of the account management page.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub username: String,
    pub email: String,
    pub email_confirmed: bool,
    pub phone_number: Option<String>,
    pub external_logins: Vec<String>,
    pub two_factor_enabled: bool,
    pub has_authenticator: bool,
    pub two_factor_client_remembered: bool,
    pub recovery_codes_left: usize,
}
