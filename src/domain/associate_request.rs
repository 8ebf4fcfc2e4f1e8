use serde::{Deserialize, Serialize};

/// Body of `POST /api/externalaccount/associate`. The client fills it from
/// the query parameters it received on the register redirect.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssociateRequest {
    #[serde(default)]
    pub associate_existing_account: bool,
    /// Username for the new-account branch.
    #[serde(default)]
    pub username: Option<String>,
    /// Email asserted by the external provider (new-account branch).
    #[serde(default)]
    pub original_email: Option<String>,
    /// Target local account email (existing-account branch).
    #[serde(default)]
    pub associate_email: Option<String>,
    pub login_provider: String,
    pub provider_key: String,
    pub provider_display_name: String,
}
