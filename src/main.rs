use nl2sql_service::app::{create_app, init_tracing, shutdown_signal};
use nl2sql_service::config::{Config, DEFAULT_LOG_FILTER};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration, then initialize tracing/logging from it
    let config = match Config::from_env() {
        Ok(config) => {
            init_tracing(&config.log_level);
            config
        }
        Err(e) => {
            init_tracing(DEFAULT_LOG_FILTER);
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Starting NL2SQL Service v{}...", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded: {:?}", config);

    let app = create_app();

    // Create TCP listener
    let listener = match tokio::net::TcpListener::bind(&config.bind_address()).await {
        Ok(listener) => {
            info!("Server running on {}", config.server_url());
            info!("Health check: GET /health");
            info!("Query endpoint: POST /query");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    // Start the server
    info!("Server starting...");
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    } else {
        info!("Server shutdown gracefully");
    }
}
