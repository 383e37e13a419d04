//! Web form
//!
//! One page with a review field and a Submit button. Posting the form runs
//! the classifier and renders the same page with the label underneath.

pub mod page;
pub mod routes;

pub use routes::{ReviewForm, WebState, router};

use tokio::net::TcpListener;
use tracing::info;

/// Serve the review form until the process is stopped
pub async fn run(state: WebState, bind: &str) -> std::io::Result<()> {
    let model = state.use_case.model().clone();
    let app = router(state);

    let listener = TcpListener::bind(bind).await?;
    info!("  Review form for {} on http://{}", model, listener.local_addr()?);

    axum::serve(listener, app).await
}
