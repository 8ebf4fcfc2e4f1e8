use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::AssociateRequest;
use crate::errors::FlowError;
use crate::services::ExternalAccountAssociation;
use crate::utils::session_cookie;

pub async fn associate(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<AssociateRequest>,
) -> Result<(CookieJar, impl IntoResponse), FlowError> {
    let cookie_name = state.config.read().await.session_cookie_name().to_owned();
    let outcome = ExternalAccountAssociation::associate(state, request).await?;

    let jar = match outcome.signed_in.as_deref() {
        Some(account_id) => jar.add(session_cookie(&cookie_name, account_id, false)),
        None => jar,
    };

    Ok((jar, Json(outcome.result)))
}
