use crate::Result as DbErrorResult;

use users_core::User;

use async_trait::async_trait;

/// Storage for user documents.
///
/// Every method is a single storage call. Implementations are shared by all
/// request handlers, so they must be usable concurrently through `&self`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up one user by primary key. `Ok(None)` when nothing matches.
    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<User>>;

    /// Persist a new user.
    async fn insert(&self, user: &User) -> DbErrorResult<()>;

    /// Remove one user by primary key, returning how many documents were deleted.
    async fn delete_by_id(&self, id: &str) -> DbErrorResult<u64>;

    /// Check the backend is reachable.
    async fn ping(&self) -> DbErrorResult<()>;
}
