//! Configuration validation for Shamir Secret Sharing splits

use crate::error::SplitError;

use super::{ChunkSize, ShareCount, Threshold};

/// Validated split parameters
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents creating configurations where more shares are required
/// than actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
    chunk_size: ChunkSize,
}

impl SplitConfig {
    /// Creates a new split configuration
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sss_dist::domain::{ChunkSize, ShareCount, SplitConfig, Threshold};
    ///
    /// // Valid: threshold <= share_count
    /// let config = SplitConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap(),
    ///     ChunkSize::new(4).unwrap(),
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    /// assert_eq!(*config.chunk_size(), 4);
    ///
    /// // Invalid: threshold > share_count
    /// let result = SplitConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap(),
    ///     ChunkSize::default(),
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        threshold: Threshold,
        share_count: ShareCount,
        chunk_size: ChunkSize,
    ) -> Result<Self, SplitError> {
        if *threshold > *share_count {
            return Err(SplitError::ThresholdExceedsShareCount {
                threshold: *threshold,
                share_count: *share_count,
            });
        }
        Ok(Self {
            threshold,
            share_count,
            chunk_size,
        })
    }

    /// Validates raw numeric parameters as they arrive from the command line
    ///
    /// Each value is range-checked first, then the threshold/share count relationship.
    ///
    /// # Errors
    /// Returns the first [`SplitError`] found
    pub fn from_args(threshold: i64, share_count: i64, chunk_size: i64) -> Result<Self, SplitError> {
        let threshold = Threshold::try_from(threshold)?;
        let share_count = ShareCount::try_from(share_count)?;
        let chunk_size = ChunkSize::try_from(chunk_size)?;
        Self::new(threshold, share_count, chunk_size)
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Gets the chunk size
    #[must_use]
    pub fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }
}
