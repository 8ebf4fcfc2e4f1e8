use axum::routing::{get, post};
use axum::Router;
use axum_server::bind;
use std::{error::Error, future::Future, pin::Pin};

use app_state::AppState;
use routes::{
    associate, details, external_callback, external_login, providers, setup_authenticator,
    verify_authenticator,
};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/ManageAccount/Details", get(details))
        .route("/ManageAccount/SetupAuthenticator", get(setup_authenticator))
        .route("/ManageAccount/VerifyAuthenticator", post(verify_authenticator))
        .route("/ExternalAccount/Login", get(external_login))
        .route("/ExternalAccount/Callback", get(external_callback))
        .route("/ExternalAccount/Providers", get(providers))
        .route("/api/externalaccount/associate", post(associate))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
