use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use thiserror::Error;

use crate::domain::{list_items, ResultVM};

/// Failure taxonomy shared by both flows. Everything except
/// `Unauthenticated` surfaces as the uniform result envelope rather than an
/// HTTP error; provider messages pass through verbatim.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlowError {
    #[error("no authenticated user is bound to the request")]
    Unauthenticated,

    #[error("request failed validation")]
    Validation(Vec<String>),

    #[error("Verification code is invalid.")]
    InvalidCode,

    #[error("User with email {0} not found")]
    NotFound(String),

    #[error("the identity store rejected the operation")]
    Provider(Vec<String>),
}

impl From<FlowError> for ResultVM {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Unauthenticated => {
                ResultVM::error("Unauthenticated", list_items([err.to_string()]))
            }
            FlowError::Validation(messages) => ResultVM::error("Invalid data", list_items(messages)),
            FlowError::InvalidCode => {
                ResultVM::error("Invalid data", list_items(["Verification code is invalid."]))
            }
            FlowError::NotFound(email) => ResultVM::error(
                "Invalid data",
                list_items([format!("User with email {} not found", email)]),
            ),
            FlowError::Provider(messages) => ResultVM::error("Invalid data", list_items(messages)),
        }
    }
}

impl IntoResponse for FlowError {
    fn into_response(self) -> axum::response::Response {
        match self {
            FlowError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            other => (StatusCode::OK, Json(ResultVM::from(other))).into_response(),
        }
    }
}
