//! Error types for splitting secrets and persisting shares

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid split parameters, or a share set that cannot be recombined
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Threshold below 1
    #[error("Threshold must be at least 1 (got {0})")]
    ThresholdTooLow(i64),

    /// Threshold above what GF256 can express
    #[error("Threshold maximum is 255 (got {0})")]
    ThresholdTooHigh(i64),

    /// Share count outside 1..=254
    #[error("Share count must be between 1 and 254 (got {0})")]
    ShareCountOutOfRange(i64),

    /// Index 255 has no GF256 evaluation point left
    #[error("Share index 255 is reserved for GF256 operations")]
    ShareIndexReserved,

    /// More shares required than exist
    #[error("Threshold {threshold} cannot exceed share count {share_count}")]
    ThresholdExceedsShareCount { threshold: u8, share_count: u8 },

    /// Chunk size of zero or less
    #[error("Chunk size must be at least 1 (got {0})")]
    InvalidChunkSize(i64),

    /// Nothing to split
    #[error("Secret is empty")]
    EmptySecret,

    /// Recombination called without any share
    #[error("No shares provided")]
    NoShares,

    /// Fewer distinct shares than the threshold
    #[error("Insufficient shares: need at least {threshold}, but only {provided} provided")]
    InsufficientShares { threshold: u8, provided: usize },

    /// The same index supplied twice
    #[error("Share #{0} provided more than once")]
    DuplicateShare(u8),

    /// Share metadata disagrees with the rest of the set
    #[error("Share #{index} is inconsistent with share #{reference}: {reason}")]
    InconsistentShare {
        index: u8,
        reference: u8,
        reason: String,
    },

    /// The underlying sharing scheme rejected a chunk
    #[error("Failed to recover chunk {chunk}: {reason}")]
    Recovery { chunk: usize, reason: String },
}

/// Errors surfaced by the distribution pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Command-line input that could not be interpreted
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Splitting rejected its parameters
    #[error(transparent)]
    Split(#[from] SplitError),

    /// A share violated the encoder's preconditions
    #[error("Share #{index}: serialization failed: {reason}")]
    Serialization { index: u8, reason: String },

    /// An artifact did not decode into a valid share
    #[error("Corrupt share artifact: {0}")]
    Corrupt(String),

    /// Opening, writing or finalizing an artifact failed
    #[error("Share #{index}: I/O error on {}: {source}", .path.display())]
    Io {
        index: u8,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading an artifact back failed
    #[error("Failed to read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The task stopped because another share already failed
    #[error("Share #{index}: cancelled after an earlier failure")]
    Cancelled { index: u8 },

    /// A share task panicked instead of returning
    #[error("Share task panicked: {0}")]
    TaskPanicked(String),
}

impl Error {
    /// Index of the share this error belongs to, when it belongs to one
    #[must_use]
    pub fn share_index(&self) -> Option<u8> {
        match self {
            Self::Serialization { index, .. } | Self::Io { index, .. } | Self::Cancelled { index } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
