//! Threshold newtype for Shamir Secret Sharing

use crate::error::SplitError;

/// Threshold for Shamir Secret Sharing (1..=255)
///
/// Invariant: threshold >= 1 (enforced at construction).
/// A threshold of 1 is accepted: every share then carries the secret on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`SplitError::ThresholdTooLow`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sss_dist::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(1).is_ok());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, SplitError> {
        if value == 0 {
            return Err(SplitError::ThresholdTooLow(0));
        }
        Ok(Self(value))
    }
}

impl TryFrom<i64> for Threshold {
    type Error = SplitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(SplitError::ThresholdTooLow(value));
        }
        let value = u8::try_from(value).map_err(|_| SplitError::ThresholdTooHigh(value))?;
        Self::new(value)
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
