//! HTTP front controller
//!
//! A thin axum layer over [`CategorySuggester`](triage_application::CategorySuggester):
//! it decodes requests, hands them to the suggester with a per-request
//! cancellation token, and maps the outcome onto status codes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve `router` on `listener` until `shutdown` is cancelled.
///
/// In-flight requests are drained; their suggestion tokens are children of
/// `shutdown`, so pending upstream calls abort instead of holding the drain.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            info!("Shutdown requested, draining in-flight requests");
        })
        .await
}
