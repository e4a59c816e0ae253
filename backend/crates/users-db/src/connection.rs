//! Startup connection to MongoDB.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use mongodb::{Client, bson::doc, options::ClientOptions};

/// Connect to MongoDB and verify the deployment answers a ping.
///
/// Parsing the URI (which may involve an SRV lookup), building the client
/// and the ping all share one `timeout` budget. The returned client is a
/// pooled handle, cheap to clone and safe to share across tasks.
pub async fn connect(uri: &str, timeout: Duration) -> DbErrorResult<Client> {
    let attempt = async {
        let mut options = ClientOptions::parse(uri).await?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok::<Client, DbError>(client)
    };

    tokio::time::timeout(timeout, attempt)
        .await
        .map_err(|_| DbError::Timeout {
            operation: "MongoDB connect",
            seconds: timeout.as_secs(),
            location: ErrorLocation::from(Location::caller()),
        })?
}
