use axum::extract::{Query, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::services::ExternalAccountAssociation;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLoginQuery {
    pub provider: String,
    pub return_url: Option<String>,
}

pub async fn external_login(
    State(state): State<AppState>,
    Query(query): Query<ExternalLoginQuery>,
) -> Redirect {
    let directive = ExternalAccountAssociation::begin_challenge(
        state,
        &query.provider,
        query.return_url.as_deref(),
    )
    .await;

    Redirect::to(&directive.location)
}
