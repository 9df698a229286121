//! `ShareCount` newtype for Shamir Secret Sharing

use crate::error::SplitError;

/// Number of shares to create (1..=254)
///
/// Represents the total number of shares that will be created.
/// The maximum is 254 due to GF256 limitations in the blahaj crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count (254)
    pub const MAX: u8 = 254;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`SplitError::ShareCountOutOfRange`] if count is 0 or 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sss_dist::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 254);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(255).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, SplitError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SplitError::ShareCountOutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }
}

impl TryFrom<i64> for ShareCount {
    type Error = SplitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u8::try_from(value).map_err(|_| SplitError::ShareCountOutOfRange(value))?;
        Self::new(value)
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
