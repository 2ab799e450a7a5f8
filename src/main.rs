use std::sync::Arc;
use tokio::net::TcpListener;
use pdf_keyword_scanner::{
    config::Config,
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // Create application state
    let app_state = AppState {
        config: Arc::new(config),
    };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    tracing::info!("Server is running on port {}", server_addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}
