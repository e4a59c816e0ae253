pub mod connection;
pub mod documents;
pub mod error;
pub mod repositories;


pub use connection::connect;
pub use documents::user_document::{id_filter, user_from_document, user_to_document};
pub use error::{DbError, Result};
pub use repositories::mongo_user_repository::MongoUserRepository;
pub use repositories::user_store::UserStore;

/// Database holding the users collection
pub const DATABASE_NAME: &str = "goformongo";

/// Collection of user documents, keyed by `_id`
pub const USERS_COLLECTION: &str = "users";

/// Startup budget for connecting and the first ping
pub const CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
