use users_config::Config;
use users_db::{CONNECT_TIMEOUT, MongoUserRepository};
use users_server::{
    AppState, build_router,
    error::{Result as ServerErrorResult, ServerError},
    logger,
};

use std::process::ExitCode;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Config and logger failures happen before there is a logger
            if log::log_enabled!(log::Level::Error) {
                error!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
        })?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting users-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    info!(
        "Connecting to MongoDB (timeout {}s)",
        CONNECT_TIMEOUT.as_secs()
    );
    let client = users_db::connect(&config.database.uri, CONNECT_TIMEOUT).await?;
    info!("Connected to MongoDB");

    let state = AppState::new(Arc::new(MongoUserRepository::new(&client)));
    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Actual address matters when port is 0
    let actual_addr = listener.local_addr().map_err(ServerError::Serve)?;
    info!("Server running on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
