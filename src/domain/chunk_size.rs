//! `ChunkSize` newtype

use crate::error::SplitError;

/// Number of secret bytes dealt per independent split (>= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChunkSize(usize);

impl ChunkSize {
    /// Chunk size used when none is given on the command line
    pub const DEFAULT: usize = 256;

    /// Creates a new chunk size
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidChunkSize`] if size is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sss_dist::domain::ChunkSize;
    ///
    /// assert_eq!(*ChunkSize::new(4).unwrap(), 4);
    /// assert!(ChunkSize::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, SplitError> {
        if value == 0 {
            return Err(SplitError::InvalidChunkSize(0));
        }
        Ok(Self(value))
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i64> for ChunkSize {
    type Error = SplitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let size = usize::try_from(value).map_err(|_| SplitError::InvalidChunkSize(value))?;
        Self::new(size).map_err(|_| SplitError::InvalidChunkSize(value))
    }
}

impl std::ops::Deref for ChunkSize {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
