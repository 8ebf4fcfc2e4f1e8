use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::errors::FlowError;
use crate::services::TwoFactorEnrollment;
use crate::utils::current_account;

pub async fn details(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, FlowError> {
    let account = current_account(&state, &jar).await?;
    let details = TwoFactorEnrollment::details(state, &account).await;

    Ok(Json(details))
}
