//! Review classification domain.
//!
//! - [`label::Label`] - the two internal categories a model can answer with
//! - [`label::Sentiment`] - what the user is shown
//! - [`example::ExampleSet`] - the ordered few-shot examples
//! - [`verdict::Classification`] - a model reply and the sentiment read from it

pub mod example;
pub mod label;
pub mod verdict;
