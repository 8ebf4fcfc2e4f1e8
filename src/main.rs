use std::sync::Arc;
use tokio::sync::RwLock;

use account_service::app_state::AppState;
use account_service::services::{HashmapIdentityProvider, MockEmailClient};
use account_service::utils::Config;
use account_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::from_env();
    let identity_provider = HashmapIdentityProvider::new(
        config.issuer().to_owned(),
        config.external_providers().to_vec(),
    );
    let email_client = MockEmailClient::default();

    let app_state = AppState::new(
        Arc::new(RwLock::new(identity_provider)),
        Arc::new(RwLock::new(email_client)),
        Arc::new(RwLock::new(config)),
    );

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
