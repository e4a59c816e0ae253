mod create_user_request;
mod error;
