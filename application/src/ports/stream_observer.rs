//! Stream observer port
//!
//! Receives a model reply as it streams in. Observers only watch: the reply
//! used for classification is aggregated independently of them.

use reviewbot_domain::Model;

/// Callback for incremental model output
///
/// Implementations live in the presentation layer and can echo the reply
/// in various ways (console, logs, etc.)
pub trait StreamObserver: Send + Sync {
    /// Called before the first chunk arrives.
    fn on_stream_start(&self, _model: &Model) {}

    /// Called for each text chunk from the model.
    fn on_stream_chunk(&self, _chunk: &str) {}

    /// Called once the stream has finished, successfully or not.
    fn on_stream_end(&self) {}
}

/// No-op observer for when nothing should be echoed
pub struct NoStreamObserver;

impl StreamObserver for NoStreamObserver {}
