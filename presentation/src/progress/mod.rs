//! Stream observers for the console

pub mod echo;
pub mod spinner;
