pub mod email;
pub mod username;

pub use email::is_valid_email;
pub use username::is_valid_username;
