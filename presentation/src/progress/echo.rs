//! Console echo of a streaming reply

use reviewbot_application::StreamObserver;
use reviewbot_domain::Model;
use std::io::Write;

/// Writes each chunk to stdout as soon as it arrives
pub struct ConsoleStreamEcho;

impl StreamObserver for ConsoleStreamEcho {
    fn on_stream_chunk(&self, chunk: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(chunk.as_bytes());
        let _ = stdout.flush();
    }

    fn on_stream_end(&self) {
        println!();
    }

    fn on_stream_start(&self, model: &Model) {
        tracing::debug!("Echoing reply from {}", model);
    }
}
