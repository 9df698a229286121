// Internal library for testing purposes
// Not intended for external use as a library

pub mod artifact;
#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod compress;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod splitter;

pub use error::{Error, Result, SplitError};
