use thiserror::Error;

// Failures reported by the identity store. Messages are user-facing and pass
// through to the result envelope verbatim.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdentityError {
    #[error("An account with email '{0}' already exists.")]
    DuplicateEmail(String),

    #[error("Username '{0}' is already taken.")]
    DuplicateUsername(String),

    #[error("Email '{0}' is invalid.")]
    InvalidEmail(String),

    #[error("This external login is already associated with an account.")]
    LoginAlreadyLinked,

    #[error("Account '{0}' was not found.")]
    AccountNotFound(String),

    #[error("The confirmation token is invalid or has expired.")]
    InvalidToken,
}
