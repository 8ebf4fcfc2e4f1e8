/// One external-identity binding. (login_provider, provider_key) maps to at
/// most one account across the whole store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLogin {
    pub login_provider: String,
    pub provider_key: String,
    pub provider_display_name: String,
}

impl ExternalLogin {
    pub fn new(
        login_provider: impl Into<String>,
        provider_key: impl Into<String>,
        provider_display_name: impl Into<String>,
    ) -> Self {
        Self {
            login_provider: login_provider.into(),
            provider_key: provider_key.into(),
            provider_display_name: provider_display_name.into(),
        }
    }
}

/// The identity assertion handed back by an external provider after the
/// consent round-trip. Lives for exactly one callback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalAssertion {
    pub login_provider: String,
    pub provider_key: String,
    pub provider_display_name: String,
    pub email: String,
}
