pub mod mongo_user_repository;
pub mod user_store;
