use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::errors::FlowError;
use crate::services::TwoFactorEnrollment;
use crate::utils::current_account;

pub async fn setup_authenticator(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, FlowError> {
    let account = current_account(&state, &jar).await?;
    let authenticator_details = TwoFactorEnrollment::setup_authenticator(state, &account).await?;

    Ok(Json(authenticator_details))
}
