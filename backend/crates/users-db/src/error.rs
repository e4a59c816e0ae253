use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("MongoDB error: {source} {location}")]
    Mongo {
        source: mongodb::error::Error,
        location: ErrorLocation,
    },

    #[error("BSON conversion failed: {message} {location}")]
    Bson {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user document: {message} {location}")]
    InvalidDocument {
        message: String,
        location: ErrorLocation,
    },

    #[error("{operation} timed out after {seconds}s {location}")]
    Timeout {
        operation: &'static str,
        seconds: u64,
        location: ErrorLocation,
    },
}

impl From<mongodb::error::Error> for DbError {
    #[track_caller]
    fn from(source: mongodb::error::Error) -> Self {
        Self::Mongo {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
