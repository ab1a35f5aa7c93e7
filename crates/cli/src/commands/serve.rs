use anyhow::Result;
use ironlog_http::{AppState, create_router};
use ironlog_service::WorkoutService;
use std::sync::Arc;

pub(crate) async fn run(service: Arc<WorkoutService>, host: &str, port: u16) -> Result<()> {
    let router = create_router(Arc::new(AppState::new(service)));
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting HTTP server on {}", listener.local_addr()?);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
