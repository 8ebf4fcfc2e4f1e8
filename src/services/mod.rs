pub mod association;
pub mod enrollment;
pub mod hashmap_identity_provider;
pub mod mock_email_client;

pub use association::*;
pub use enrollment::*;
pub use hashmap_identity_provider::*;
pub use mock_email_client::*;
