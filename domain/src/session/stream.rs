//! Events of a streamed model reply.

/// One piece of a reply as it arrives from the model.
///
/// `Completed`, `Error` and `TimedOut` end the stream; a sender that simply
/// closes the channel leaves the reply as whatever `Delta`s were received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A fragment of reply text
    Delta(String),
    /// The full reply text
    Completed(String),
    /// The model or transport failed mid-stream
    Error(String),
    /// The reply did not finish within the request timeout
    TimedOut,
}
