pub mod account;
pub mod account_details;
pub mod associate_request;
pub mod authenticator_details;
pub mod claim;
pub mod email;
pub mod email_sender;
pub mod external_login;
pub mod identity_err;
pub mod identity_provider;
pub mod result_vm;
pub mod verify_authenticator_request;

pub use account::*;
pub use account_details::*;
pub use associate_request::*;
pub use authenticator_details::*;
pub use claim::*;
pub use email::*;
pub use email_sender::*;
pub use external_login::*;
pub use identity_err::*;
pub use identity_provider::*;
pub use result_vm::*;
pub use verify_authenticator_request::*;
