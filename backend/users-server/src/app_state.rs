use users_core::UserIdGenerator;
use users_db::UserStore;

use std::sync::Arc;

/// Shared state handed to every request handler.
///
/// Both members are created once at startup and only read afterwards;
/// cloning the state clones the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub ids: Arc<UserIdGenerator>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            ids: Arc::new(UserIdGenerator::new()),
        }
    }
}
