use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{EmailSender, IdentityProvider};
use crate::utils::Config;

// Type aliases keep the handler signatures readable.
pub type IdentityProviderType = Arc<RwLock<dyn IdentityProvider>>;
pub type EmailClientType = Arc<RwLock<dyn EmailSender>>;
pub type ConfigType = Arc<RwLock<Config>>;

#[derive(Clone)]
pub struct AppState {
    pub identity_provider: IdentityProviderType,
    pub email_client: EmailClientType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        identity_provider: IdentityProviderType,
        email_client: EmailClientType,
        config: ConfigType,
    ) -> Self {
        Self {
            identity_provider,
            email_client,
            config,
        }
    }
}
