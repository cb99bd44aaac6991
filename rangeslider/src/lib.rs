//! rangeslider is a headless custom range slider that mirrors the value of a
//! numeric input element.
//!
//! The crate owns the model: mapping values to track positions, snapping to
//! the step grid, following a pointer drag, and keeping the host element and
//! the visuals in sync. Rendering and event delivery are abstracted behind the
//! [`HostElement`] and [`Surface`] traits; [`MemoryHost`] and
//! [`HeadlessSurface`] implement them in memory.
//!
//! # Quick Start
//!
//! ```
//! use rangeslider::{
//!     EventTarget, HeadlessSurface, HostElement, MemoryHost, Px, SliderEvent, SliderOptions,
//!     rangeslider,
//! };
//!
//! let host = MemoryHost::new()
//!     .with_attribute("min", "0")
//!     .with_attribute("max", "10")
//!     .with_value("2");
//! let surface = HeadlessSurface::new(Px(110), Px(10));
//!
//! let mut slider = rangeslider(host.clone(), surface, SliderOptions::default())
//!     .unwrap()
//!     .expect("the headless surface has no native range control");
//!
//! // Press off the handle, drag to the far end, release.
//! slider.dispatch(EventTarget::Track, &SliderEvent::pointer("pointerdown", Px(60)));
//! slider.dispatch(EventTarget::Document, &SliderEvent::pointer("pointermove", Px(200)));
//! slider.dispatch(EventTarget::Document, &SliderEvent::pointer("pointerup", Px(200)));
//!
//! assert_eq!(slider.value(), 10.0);
//! assert_eq!(host.value(), "10");
//! ```
//!
//! # Echoes
//!
//! Every value the slider writes to its host is announced with a
//! [`ChangeEvent`] tagged with the slider's [`SliderId`]. When the environment
//! feeds such an event back through [`RangeSlider::dispatch`] it is recognized
//! and ignored, so a write never causes a redundant re-render.

pub mod error;
pub mod headless;
pub mod host;
mod listeners;
pub mod options;
mod prop;
pub mod px;
pub mod range;
pub mod slider;
pub mod surface;

use tracing::debug;

pub use crate::{
    error::SliderError,
    headless::HeadlessSurface,
    host::{CHANGE_EVENT, ChangeEvent, ChangeOrigin, HostElement, INPUT_EVENT, MemoryHost, SliderId},
    listeners::EventTarget,
    options::{SliderClasses, SliderOptions},
    prop::{Callback, CallbackWith},
    px::Px,
    range::DomainRange,
    slider::{EventOutcome, Geometry, Lifecycle, RangeSlider, SlideEvent, SliderEvent},
    surface::{HiddenAncestors, Part, Surface, VisibilityOverride, VisualFrame},
};

/// Builds and mounts a slider for `host`.
///
/// Returns `Ok(None)` when `options.polyfill` is set and the surface reports a
/// native range control, in which case the host is left untouched.
pub fn rangeslider<H: HostElement, S: Surface>(
    host: H,
    surface: S,
    options: SliderOptions,
) -> Result<Option<RangeSlider<H, S>>, SliderError> {
    if options.polyfill && surface.native_range_supported() {
        debug!("native range control available, not polyfilling");
        return Ok(None);
    }
    let mut slider = RangeSlider::new(host, surface, options);
    slider.mount()?;
    Ok(Some(slider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_range_skips_the_polyfill() {
        let host = MemoryHost::new().with_value("5");
        let surface = HeadlessSurface::new(Px(110), Px(10)).with_native_range(true);
        let slider = rangeslider(host.clone(), surface, SliderOptions::default()).unwrap();
        assert!(slider.is_none());
        assert!(!host.is_concealed());
    }

    #[test]
    fn polyfill_off_always_builds() {
        let host = MemoryHost::new().with_value("5");
        let surface = HeadlessSurface::new(Px(110), Px(10)).with_native_range(true);
        let options = SliderOptions::default().polyfill(false);
        let slider = rangeslider(host.clone(), surface, options)
            .unwrap()
            .expect("polyfill disabled");
        assert_eq!(slider.lifecycle(), Lifecycle::Mounted);
        assert!(host.is_concealed());
    }

    #[test]
    fn without_native_support_a_mounted_slider_is_returned() {
        let surface = HeadlessSurface::new(Px(110), Px(10));
        let slider = rangeslider(MemoryHost::new(), surface, SliderOptions::default())
            .unwrap()
            .expect("no native range");
        assert_eq!(slider.value(), 50.0);
        assert!(slider.surface().is_mounted());
    }
}
