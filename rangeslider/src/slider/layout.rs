use crate::{
    px::Px,
    range::cap,
    surface::{Part, Surface, VisibilityOverride},
};

/// Pixel geometry of a mounted slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// Rendered width of the track.
    pub track_width: Px,
    /// Rendered width of the handle.
    pub handle_width: Px,
}

impl Geometry {
    /// Measures track and handle, revealing hidden ancestors for the duration.
    pub fn measure<S: Surface + ?Sized>(surface: &mut S) -> Self {
        let revealed = VisibilityOverride::new(surface);
        Self {
            track_width: revealed.width(Part::Range),
            handle_width: revealed.width(Part::Handle),
        }
    }

    /// Distance the handle can travel: track width minus handle width.
    pub fn content_width(&self) -> Px {
        self.track_width.saturating_sub(self.handle_width).non_negative()
    }

    /// Grab offset used when a drag starts outside the handle: its center.
    pub fn default_grab(&self) -> f64 {
        self.handle_width.to_f64() / 2.0
    }

    /// Offset of the handle's left edge for a normalized position.
    pub fn handle_start(&self, position: f64) -> f64 {
        cap(position, 0.0, 1.0) * self.content_width().to_f64()
    }

    /// Whether a track-relative `offset` lies on the handle drawn at `position`.
    pub fn hits_handle(&self, position: f64, offset: f64) -> bool {
        let start = self.handle_start(position);
        offset >= start && offset < start + self.handle_width.to_f64()
    }

    /// Normalized position for a handle whose left edge is at `handle_offset`.
    ///
    /// Not clamped; zero when the track has no room for the handle to move.
    pub fn position_at(&self, handle_offset: f64) -> f64 {
        let content = self.content_width().to_f64();
        if content <= 0.0 {
            return 0.0;
        }
        handle_offset / content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{headless::HeadlessSurface, options::SliderClasses};

    fn geometry(track: i32, handle: i32) -> Geometry {
        Geometry {
            track_width: Px(track),
            handle_width: Px(handle),
        }
    }

    #[test]
    fn content_width_excludes_handle() {
        assert_eq!(geometry(220, 20).content_width(), Px(200));
        assert_eq!(geometry(10, 20).content_width(), Px::ZERO);
    }

    #[test]
    fn handle_hit_test() {
        let g = geometry(220, 20);
        // Handle at 50% spans [100, 120).
        assert!(g.hits_handle(0.5, 100.0));
        assert!(g.hits_handle(0.5, 119.9));
        assert!(!g.hits_handle(0.5, 120.0));
        assert!(!g.hits_handle(0.5, 99.0));
    }

    #[test]
    fn position_for_degenerate_track_is_zero() {
        assert_eq!(geometry(20, 20).position_at(15.0), 0.0);
        assert_eq!(geometry(220, 20).position_at(50.0), 0.25);
    }

    #[test]
    fn measure_sees_through_hidden_ancestors() {
        let mut surface = HeadlessSurface::new(Px(300), Px(30)).with_hidden_ancestor();
        surface.mount(&SliderClasses::default());
        let g = Geometry::measure(&mut surface);
        assert_eq!(g, geometry(300, 30));
        assert!(!surface.is_visible());
    }
}
