use axum::extract::{Query, State};
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::services::ExternalAccountAssociation;
use crate::utils::session_cookie;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExternalCallbackQuery {
    pub return_url: Option<String>,
    pub remote_error: Option<String>,
}

pub async fn external_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<ExternalCallbackQuery>,
) -> (CookieJar, Redirect) {
    let cookie_name = state.config.read().await.session_cookie_name().to_owned();
    let outcome =
        ExternalAccountAssociation::handle_callback(state, query.return_url, query.remote_error)
            .await;

    let jar = match outcome.signed_in.as_deref() {
        Some(account_id) => jar.add(session_cookie(&cookie_name, account_id, false)),
        None => jar,
    };

    (jar, Redirect::to(&outcome.location))
}
