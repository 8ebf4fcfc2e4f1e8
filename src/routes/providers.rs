use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;

// Display names of the configured external providers, for the login UI.
pub async fn providers(State(state): State<AppState>) -> impl IntoResponse {
    let providers = state
        .identity_provider
        .read()
        .await
        .external_providers()
        .await;

    Json(providers)
}
