use thiserror::Error;

/// Lifecycle misuse of a [`RangeSlider`](crate::RangeSlider).
///
/// Bad numeric attributes are never an error; they fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliderError {
    /// `mount` was called on a slider that is already mounted.
    #[error("slider is already mounted")]
    AlreadyMounted,
    /// The operation needs a mounted slider.
    #[error("slider is not mounted yet")]
    NotMounted,
    /// The slider was destroyed; construct a new one to reattach.
    #[error("slider has been destroyed")]
    Destroyed,
}
