//! The visual surface a slider paints on.
//!
//! The slider never creates elements or touches styles itself. It describes
//! what should be shown as a [`VisualFrame`] and hands it to a [`Surface`],
//! which owns the actual track, fill, handle and extra bar elements.
//!
//! Reading rendered widths of an element inside a hidden ancestor yields
//! zero, so measurement goes through [`VisibilityOverride`]: a guard that
//! forces hidden ancestors visible and restores them when dropped, whichever
//! way the measuring code exits.

use std::ops::Deref;

use smallvec::SmallVec;
use tracing::trace;

use crate::{options::SliderClasses, px::Px};

/// The elements a slider consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The track spanning the full range.
    Range,
    /// The filled portion of the track up to the handle.
    Fill,
    /// The draggable handle.
    Handle,
    /// The optional secondary indicator.
    ExtraBar,
}

/// Everything needed to paint the slider at one moment.
///
/// Percentages are in `[0, 100]`. Fill and handle are relative to the track
/// content width (track width minus handle width), so a handle at `100` has
/// its right edge on the track's right edge. The extra bar is relative to the
/// whole track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualFrame {
    /// Width of the fill.
    pub fill_percent: f64,
    /// Left offset of the handle.
    pub handle_percent: f64,
    /// Width of the extra bar, `None` when the slider has no extra bar.
    pub extra_percent: Option<f64>,
}

/// Ancestors a [`Surface`] made visible for measurement.
///
/// Opaque to the slider; handed back to
/// [`Surface::restore_visibility`] unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenAncestors(SmallVec<[usize; 4]>);

impl HiddenAncestors {
    /// Wraps surface specific ancestor indices.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// Whether nothing had to be revealed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The revealed ancestor indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

/// Environment glue for creating, styling and measuring slider elements.
pub trait Surface {
    /// Whether the environment already renders native range inputs.
    ///
    /// When true and polyfilling is requested, no slider is constructed.
    fn native_range_supported(&self) -> bool {
        false
    }

    /// Inserts the slider elements next to the host, applying `classes`.
    fn mount(&mut self, classes: &SliderClasses);

    /// Removes everything [`mount`](Self::mount) inserted.
    fn unmount(&mut self);

    /// Applies a frame to the fill, handle and extra bar styles.
    fn paint(&mut self, frame: &VisualFrame);

    /// Adds or removes a presentation class on the track.
    fn set_class(&mut self, class: &str, enabled: bool);

    /// Rendered width of a part; zero while it is hidden.
    fn width(&self, part: Part) -> Px;

    /// Left edge of a part in the coordinate space of pointer events.
    fn left(&self, part: Part) -> Px;

    /// Forces hidden ancestors visible and reports which ones were changed.
    fn force_visible(&mut self) -> HiddenAncestors;

    /// Hides again what [`force_visible`](Self::force_visible) revealed.
    fn restore_visibility(&mut self, hidden: HiddenAncestors);
}

/// Scoped "measure with temporary visibility" guard.
///
/// ```
/// use rangeslider::{HeadlessSurface, Part, Px, VisibilityOverride, Surface};
///
/// let mut surface = HeadlessSurface::new(Px(200), Px(20)).with_hidden_ancestor();
/// # surface.mount(&Default::default());
/// assert_eq!(surface.width(Part::Range), Px(0));
/// {
///     let revealed = VisibilityOverride::new(&mut surface);
///     assert_eq!(revealed.width(Part::Range), Px(200));
/// }
/// assert!(!surface.is_visible());
/// ```
pub struct VisibilityOverride<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    hidden: Option<HiddenAncestors>,
}

impl<'a, S: Surface + ?Sized> VisibilityOverride<'a, S> {
    /// Reveals hidden ancestors of `surface` until the guard is dropped.
    pub fn new(surface: &'a mut S) -> Self {
        let hidden = surface.force_visible();
        if !hidden.is_empty() {
            trace!(count = hidden.0.len(), "forced hidden ancestors visible");
        }
        Self {
            surface,
            hidden: Some(hidden),
        }
    }
}

impl<S: Surface + ?Sized> Deref for VisibilityOverride<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for VisibilityOverride<'_, S> {
    fn drop(&mut self) {
        if let Some(hidden) = self.hidden.take() {
            self.surface.restore_visibility(hidden);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;
    use crate::headless::HeadlessSurface;

    #[test]
    fn override_restores_after_panic() {
        let mut surface = HeadlessSurface::new(Px(100), Px(10))
            .with_hidden_ancestor()
            .with_hidden_ancestor();
        surface.mount(&SliderClasses::default());

        let result = catch_unwind(AssertUnwindSafe(|| {
            let revealed = VisibilityOverride::new(&mut surface);
            assert!(revealed.is_visible());
            panic!("measurement failed");
        }));

        assert!(result.is_err());
        assert!(!surface.is_visible());
        assert_eq!(surface.width(Part::Range), Px::ZERO);
    }

    #[test]
    fn visible_surface_reveals_nothing() {
        let mut surface = HeadlessSurface::new(Px(100), Px(10));
        assert!(surface.force_visible().is_empty());
    }
}
