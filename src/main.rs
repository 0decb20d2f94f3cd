//! Tick Wheel - A drag-to-set countdown wheel served over HTTP
//!
//! This is the main entry point for the tick-wheel application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use tick_wheel::{
    api::{create_router, ServerState},
    config::Config,
    state::TickWheel,
    tasks::phase_logger_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tick_wheel={},tower_http=info", config.log_level()))
        .init();

    info!("Starting tick-wheel server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, radius={}, tick={}ms",
          config.host, config.port, config.radius, config.tick_ms);

    // Create the wheel and log its phase changes
    let wheel = TickWheel::new(config.wheel_config());
    tokio::spawn(phase_logger_task(wheel.subscribe()));

    // Create HTTP router with all endpoints
    let state = Arc::new(ServerState::new(Arc::clone(&wheel), config.port, config.host.clone()));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /drag/start - Pointer down at {{x, y}} relative to the dial centre");
    info!("  POST /drag/move  - Pointer moved by {{x, y}}");
    info!("  POST /drag/end   - Pointer up or gesture cancelled");
    info!("  POST /toggle     - Start or pause the countdown");
    info!("  GET  /status     - Current wheel state");
    info!("  GET  /health     - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    wheel.shutdown()?;
    info!("Server shutdown complete");
    Ok(())
}
