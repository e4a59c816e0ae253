pub mod user_id_generator;
