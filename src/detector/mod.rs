//! Command detection and parameter extraction
//!
//! Rule-based intent classifier for Polish utterances. Text flows through
//! the classifier, then the per-category extractor, then the composer:
//! raw text -> category -> parameters -> handler identifier and message.
//! Everything here is synchronous and holds no state between calls.

pub mod classifier;
pub mod composer;
pub mod extractor;
pub mod registry;
pub mod transparency;
pub mod types;

#[cfg(test)]
mod scenario_tests;

pub use classifier::CommandDetector;
pub use types::*;
