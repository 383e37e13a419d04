//! HTTP routes for the review form

use super::page::{self, Outcome};
use crate::progress::echo::ConsoleStreamEcho;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use reviewbot_application::{ClassifyReviewUseCase, NoStreamObserver, StreamObserver};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// State shared across handlers
pub struct WebState {
    pub use_case: ClassifyReviewUseCase,
    /// Echo streamed replies to the server's stdout
    pub echo: bool,
}

type WebStateArc = Arc<WebState>;

/// Submitted form fields
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub review: String,
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_review))
        .route("/health", get(health))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

async fn show_form() -> Html<String> {
    Html(page::render("", Outcome::Empty))
}

async fn submit_review(
    State(state): State<WebStateArc>,
    Form(form): Form<ReviewForm>,
) -> (StatusCode, Html<String>) {
    info!("  Review submitted ({} chars)", form.review.chars().count());

    let observer: &dyn StreamObserver = if state.echo {
        &ConsoleStreamEcho
    } else {
        &NoStreamObserver
    };

    match state
        .use_case
        .execute_with_observer(&form.review, observer)
        .await
    {
        Ok(classification) => (
            StatusCode::OK,
            Html(page::render(
                &form.review,
                Outcome::Label(classification.sentiment),
            )),
        ),
        Err(e) => {
            error!("  Classification failed: {}", e);
            let message = e.to_string();
            (
                StatusCode::BAD_GATEWAY,
                Html(page::render(&form.review, Outcome::Error(&message))),
            )
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
