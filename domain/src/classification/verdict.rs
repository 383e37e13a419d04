//! Reading a sentiment out of a free-text model reply

use super::label::{Label, Sentiment};
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Map a model reply to a sentiment.
///
/// Positive iff the reply mentions `alpha` anywhere, ignoring case. Replies
/// that mention neither label fall through to Negative.
pub fn interpret_reply(reply: &str) -> Sentiment {
    if reply.to_lowercase().contains(Label::Alpha.as_str()) {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}

/// Outcome of classifying one review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Model that produced the reply
    pub model: Model,
    /// Review text as submitted
    pub review: String,
    /// Full prompt sent to the model
    pub prompt: String,
    /// Aggregated model reply
    pub reply: String,
    pub sentiment: Sentiment,
}

impl Classification {
    pub fn new(model: Model, review: String, prompt: String, reply: String) -> Self {
        let sentiment = interpret_reply(&reply);
        Self {
            model,
            review,
            prompt,
            reply,
            sentiment,
        }
    }

    /// "Positive" or "Negative"
    pub fn display_label(&self) -> &'static str {
        self.sentiment.as_str()
    }
}
