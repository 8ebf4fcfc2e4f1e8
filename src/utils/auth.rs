use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::UserAccount;
use crate::errors::FlowError;

// Resolve the account bound to the request from the session cookie.
pub async fn current_account(state: &AppState, jar: &CookieJar) -> Result<UserAccount, FlowError> {
    let cookie_name = state.config.read().await.session_cookie_name().to_owned();
    let account_id = jar
        .get(&cookie_name)
        .map(|cookie| cookie.value().to_owned())
        .ok_or(FlowError::Unauthenticated)?;

    state
        .identity_provider
        .read()
        .await
        .find_by_id(&account_id)
        .await
        .ok_or(FlowError::Unauthenticated)
}
