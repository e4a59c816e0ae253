pub mod error;
pub mod ids;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use ids::user_id_generator::UserIdGenerator;
pub use models::user::User;
