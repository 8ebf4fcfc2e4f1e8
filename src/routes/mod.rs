pub(crate) mod associate;
pub(crate) mod details;
pub(crate) mod external_callback;
pub(crate) mod external_login;
pub(crate) mod providers;
pub(crate) mod setup_authenticator;
pub(crate) mod verify_authenticator;

// re-export items from sub-modules
pub use associate::*;
pub use details::*;
pub use external_callback::*;
pub use external_login::*;
pub use providers::*;
pub use setup_authenticator::*;
pub use verify_authenticator::*;
