use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::VerifyAuthenticatorRequest;
use crate::errors::FlowError;
use crate::services::TwoFactorEnrollment;
use crate::utils::current_account;

pub async fn verify_authenticator(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<VerifyAuthenticatorRequest>,
) -> Result<impl IntoResponse, FlowError> {
    let account = current_account(&state, &jar).await?;

    // Malformed input short-circuits before any code verification.
    if request.verification_code.trim().is_empty() {
        return Err(FlowError::Validation(vec![
            "The verification code is required".to_string(),
        ]));
    }

    let result =
        TwoFactorEnrollment::verify_authenticator(state, &account, &request.verification_code)
            .await?;

    Ok(Json(result))
}
