//! Pixel unit used for slider geometry.
//!
//! Widths and pointer coordinates arrive from the hosting environment as
//! whole pixels. [`Px`] keeps them apart from domain values (which are plain
//! `f64`) so the two cannot be mixed up by accident.
//!
//! # Example
//!
//! ```
//! use rangeslider::px::Px;
//!
//! let track = Px(200);
//! let handle = Px(20);
//!
//! // The distance the handle can travel.
//! let content = track.saturating_sub(handle);
//! assert_eq!(content, Px(180));
//! ```

/// A physical pixel coordinate value.
///
/// Negative values are allowed: a pointer to the left of the track produces a
/// negative offset relative to the track's left edge. Arithmetic saturates,
/// since pointer coordinates come from outside and may be anywhere.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the pixel value to f64.
    ///
    /// ```
    /// use rangeslider::px::Px;
    ///
    /// assert_eq!(Px(42).to_f64(), 42.0);
    /// ```
    pub fn to_f64(self) -> f64 {
        self.0 as f64
    }

    /// Creates a `Px` from an f64 value, rounding to the nearest pixel and
    /// saturating at the numeric bounds instead of overflowing.
    ///
    /// `NaN` maps to zero.
    ///
    /// ```
    /// use rangeslider::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f64(42.6), Px(43));
    /// assert_eq!(Px::saturating_from_f64(f64::MAX), Px(i32::MAX));
    /// assert_eq!(Px::saturating_from_f64(f64::NAN), Px::ZERO);
    /// ```
    pub fn saturating_from_f64(value: f64) -> Self {
        // `as` saturates and maps NaN to 0.
        Px(value.round() as i32)
    }

    /// Returns the value, or zero if negative.
    pub fn non_negative(self) -> Self {
        if self.0 < 0 { Px::ZERO } else { self }
    }

    /// Saturating integer addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating integer subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_saturating_arithmetic() {
        let max = Px(i32::MAX);
        let min = Px(i32::MIN);
        assert_eq!(max.saturating_add(Px(1)), max);
        assert_eq!(min.saturating_sub(Px(1)), min);
        assert_eq!(Px(10).saturating_sub(Px(25)), Px(-15));
    }

    #[test]
    fn test_saturating_from_f64() {
        assert_eq!(Px::saturating_from_f64(f64::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f64(f64::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f64(100.4), Px(100));
        assert_eq!(Px::saturating_from_f64(-100.5), Px(-101));
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Px(10).non_negative(), Px(10));
        assert_eq!(Px(-5).non_negative(), Px::ZERO);
    }
}
