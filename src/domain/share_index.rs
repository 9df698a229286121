//! `ShareIndex` newtype for Shamir Secret Sharing

use crate::error::SplitError;

/// Share index (0..=254)
///
/// Index `i` is dealt at GF256 evaluation point `i + 1`, so 255 has no point left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Maximum valid share index (254)
    pub const MAX: u8 = 254;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`SplitError::ShareIndexReserved`] if index is 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sss_dist::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(0).unwrap();
    /// assert_eq!(*index, 0);
    ///
    /// let max_index = ShareIndex::new(ShareIndex::MAX).unwrap();
    /// assert_eq!(*max_index, 254);
    ///
    /// assert!(ShareIndex::new(255).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, SplitError> {
        if value > Self::MAX {
            return Err(SplitError::ShareIndexReserved);
        }
        Ok(Self(value))
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
