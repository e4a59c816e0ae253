pub mod create_user_request;
pub mod users;
