//! Prompt domain
//!
//! The few-shot template that turns an example set and a review into the
//! text sent to the model.

mod template;

pub use template::FewShotPrompt;
