use gm_server::{AppState, build_router, logger};

use gm_auth::TokenService;
use gm_db::SqliteIdentityStore;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = gm_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = gm_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = gm_db::connection::connect(&database_path).await?;
    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    gm_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Token service (validate() guarantees the secret is present)
    let Some(ref jwt_secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set")
    };
    let tokens = TokenService::new(
        jwt_secret.as_bytes(),
        config.auth.access_token_ttl_secs,
        config.auth.refresh_token_ttl_secs,
    );
    info!("JWT: HS256 authentication enabled");

    // Identity store backed by the users table
    let identity = Arc::new(SqliteIdentityStore::new(pool.clone()));

    // Build application state and router
    let state = AppState::new(pool, tokens, identity);
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
