//! HTTP surface: router, shared state and handlers
//!
//! Authentication, session management and template rendering are external
//! collaborators; this layer speaks JSON and expects identities to arrive
//! already resolved.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

/// Bind and serve the application until shutdown
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "silverpress listening");
    axum::serve(listener, app).await?;
    Ok(())
}
