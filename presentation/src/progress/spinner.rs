//! Spinner shown while waiting for a reply that is not echoed

use indicatif::{ProgressBar, ProgressStyle};
use reviewbot_application::StreamObserver;
use reviewbot_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner that counts received chunks and disappears when the reply is complete
pub struct ReplySpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl ReplySpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ReplySpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamObserver for ReplySpinner {
    fn on_stream_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Asking {}", model));
        pb.set_message("waiting for reply...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_stream_chunk(&self, _chunk: &str) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.inc(1);
            pb.set_message(format!("{} chunks", pb.position()));
        }
    }

    fn on_stream_end(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}
