//! An in-memory [`Surface`].
//!
//! `HeadlessSurface` stands in for a real rendering environment: widths are
//! configured up front, painted frames are recorded, and hidden ancestors can
//! be simulated to exercise measurement.

use std::collections::BTreeSet;

use crate::{
    options::SliderClasses,
    px::Px,
    surface::{HiddenAncestors, Part, Surface, VisualFrame},
};

/// A surface that records what it is asked to show.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    track_width: Px,
    handle_width: Px,
    track_left: Px,
    native_range: bool,
    /// One flag per ancestor, `true` while that ancestor is hidden.
    ancestors: Vec<bool>,
    mounted: Option<SliderClasses>,
    classes: BTreeSet<String>,
    frames: Vec<VisualFrame>,
}

impl HeadlessSurface {
    /// A visible surface with the given track and handle widths.
    pub fn new(track_width: Px, handle_width: Px) -> Self {
        Self {
            track_width,
            handle_width,
            ..Default::default()
        }
    }

    /// Places the track's left edge at `left` in pointer coordinates.
    pub fn with_track_left(mut self, left: Px) -> Self {
        self.track_left = left;
        self
    }

    /// Adds an ancestor that is hidden, making widths read as zero.
    pub fn with_hidden_ancestor(mut self) -> Self {
        self.ancestors.push(true);
        self
    }

    /// Reports native range rendering support.
    pub fn with_native_range(mut self, supported: bool) -> Self {
        self.native_range = supported;
        self
    }

    /// Changes the track width, e.g. after a viewport resize.
    pub fn set_track_width(&mut self, width: Px) {
        self.track_width = width;
    }

    /// Whether no ancestor is hidden.
    pub fn is_visible(&self) -> bool {
        self.ancestors.iter().all(|hidden| !hidden)
    }

    /// Whether the slider elements are inserted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Whether the extra bar element exists.
    pub fn has_extra_bar(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|classes| classes.extra_bar.is_some())
    }

    /// Whether the track currently carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Every painted frame, oldest first.
    pub fn frames(&self) -> &[VisualFrame] {
        &self.frames
    }

    /// The frame currently shown.
    pub fn last_frame(&self) -> Option<&VisualFrame> {
        self.frames.last()
    }

    /// How many frames were painted.
    pub fn render_count(&self) -> usize {
        self.frames.len()
    }

    fn content_width(&self) -> Px {
        self.track_width.saturating_sub(self.handle_width).non_negative()
    }
}

impl Surface for HeadlessSurface {
    fn native_range_supported(&self) -> bool {
        self.native_range
    }

    fn mount(&mut self, classes: &SliderClasses) {
        self.classes.insert(classes.range.clone());
        self.mounted = Some(classes.clone());
    }

    fn unmount(&mut self) {
        self.mounted = None;
        self.classes.clear();
    }

    fn paint(&mut self, frame: &VisualFrame) {
        self.frames.push(*frame);
    }

    fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_owned());
        } else {
            self.classes.remove(class);
        }
    }

    fn width(&self, part: Part) -> Px {
        if !self.is_mounted() || !self.is_visible() {
            return Px::ZERO;
        }
        let frame = self.frames.last().copied().unwrap_or_default();
        match part {
            Part::Range => self.track_width,
            Part::Handle => self.handle_width,
            Part::Fill => Px::saturating_from_f64(
                self.content_width().to_f64() * frame.fill_percent / 100.0,
            ),
            Part::ExtraBar => Px::saturating_from_f64(
                self.track_width.to_f64() * frame.extra_percent.unwrap_or(0.0) / 100.0,
            ),
        }
    }

    fn left(&self, part: Part) -> Px {
        match part {
            Part::Handle => {
                let frame = self.frames.last().copied().unwrap_or_default();
                self.track_left.saturating_add(Px::saturating_from_f64(
                    self.content_width().to_f64() * frame.handle_percent / 100.0,
                ))
            }
            Part::Range | Part::Fill | Part::ExtraBar => self.track_left,
        }
    }

    fn force_visible(&mut self) -> HiddenAncestors {
        let revealed = HiddenAncestors::new(
            self.ancestors
                .iter()
                .enumerate()
                .filter_map(|(idx, hidden)| hidden.then_some(idx)),
        );
        for idx in revealed.iter() {
            self.ancestors[idx] = false;
        }
        revealed
    }

    fn restore_visibility(&mut self, hidden: HiddenAncestors) {
        for idx in hidden.iter() {
            if let Some(flag) = self.ancestors.get_mut(idx) {
                *flag = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_are_zero_until_mounted() {
        let mut surface = HeadlessSurface::new(Px(300), Px(20));
        assert_eq!(surface.width(Part::Range), Px::ZERO);
        surface.mount(&SliderClasses::default());
        assert_eq!(surface.width(Part::Range), Px(300));
        assert!(surface.has_class("rangeslider"));
    }

    #[test]
    fn handle_left_follows_last_frame() {
        let mut surface = HeadlessSurface::new(Px(120), Px(20)).with_track_left(Px(10));
        surface.mount(&SliderClasses::default());
        surface.paint(&VisualFrame {
            fill_percent: 50.0,
            handle_percent: 50.0,
            extra_percent: None,
        });
        assert_eq!(surface.left(Part::Handle), Px(60));
        assert_eq!(surface.width(Part::Fill), Px(50));
    }

    #[test]
    fn force_visible_reveals_only_hidden_ancestors() {
        let mut surface = HeadlessSurface::new(Px(100), Px(10)).with_hidden_ancestor();
        surface.ancestors.push(false);
        let revealed = surface.force_visible();
        assert_eq!(revealed.iter().collect::<Vec<_>>(), vec![0]);
        assert!(surface.is_visible());
        surface.restore_visibility(revealed);
        assert_eq!(surface.ancestors, vec![true, false]);
    }
}
