//! Construction options for [`RangeSlider`](crate::RangeSlider).
//!
//! ## Usage
//!
//! Start from [`SliderOptions::default`] and override with the setters. With
//! the `serde` feature the options (minus callbacks) can be loaded from any
//! serde format.

use crate::{
    prop::{Callback, CallbackWith},
    slider::SlideEvent,
};

/// Presentation class names applied to the slider elements.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderClasses {
    /// Class of the track element.
    pub range: String,
    /// Added to the track while the host is disabled.
    pub disabled: String,
    /// Added to the track while a drag is in progress.
    pub active: String,
    /// Class of the fill element.
    pub fill: String,
    /// Class of the handle element.
    pub handle: String,
    /// Class of the extra bar; no extra bar is created when `None`.
    pub extra_bar: Option<String>,
}

impl Default for SliderClasses {
    fn default() -> Self {
        Self {
            range: "rangeslider".into(),
            disabled: "rangeslider--disabled".into(),
            active: "rangeslider--active".into(),
            fill: "rangeslider__fill".into(),
            handle: "rangeslider__handle".into(),
            extra_bar: None,
        }
    }
}

/// Options for constructing a slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderOptions {
    /// Class names of the slider elements.
    pub classes: SliderClasses,
    /// Events on the track that begin a drag.
    pub start_events: Vec<String>,
    /// Document events that move the handle during a drag.
    pub move_events: Vec<String>,
    /// Document events that end or cancel a drag.
    pub end_events: Vec<String>,
    /// Host events signalling a value change.
    pub change_events: Vec<String>,
    /// Window events signalling a layout change.
    pub resize_events: Vec<String>,
    /// Attribute holding the secondary indicator value.
    pub secondary_attribute: String,
    /// Skip construction when the environment renders range inputs natively.
    pub polyfill: bool,
    /// Invoked once after mounting.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_init: Callback,
    /// Invoked when a drag begins.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_slide_start: CallbackWith<SlideEvent>,
    /// Invoked for every handle move during a drag.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_slide: CallbackWith<SlideEvent>,
    /// Invoked when a drag ends.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_slide_end: CallbackWith<SlideEvent>,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| (*name).to_owned()).collect()
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            classes: SliderClasses::default(),
            start_events: names(&["mousedown", "touchstart", "pointerdown"]),
            move_events: names(&["mousemove", "touchmove", "pointermove"]),
            end_events: names(&[
                "mouseup",
                "touchend",
                "pointerup",
                "touchcancel",
                "pointercancel",
            ]),
            change_events: names(&["change"]),
            resize_events: names(&["resize"]),
            secondary_attribute: "data-buffer".into(),
            polyfill: true,
            on_init: Callback::default(),
            on_slide_start: CallbackWith::default(),
            on_slide: CallbackWith::default(),
            on_slide_end: CallbackWith::default(),
        }
    }
}

impl SliderOptions {
    /// Sets all class names at once.
    pub fn classes(mut self, classes: SliderClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Sets the track class.
    pub fn range_class(mut self, class: impl Into<String>) -> Self {
        self.classes.range = class.into();
        self
    }

    /// Sets the disabled class.
    pub fn disabled_class(mut self, class: impl Into<String>) -> Self {
        self.classes.disabled = class.into();
        self
    }

    /// Sets the class toggled during a drag.
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.classes.active = class.into();
        self
    }

    /// Sets the fill class.
    pub fn fill_class(mut self, class: impl Into<String>) -> Self {
        self.classes.fill = class.into();
        self
    }

    /// Sets the handle class.
    pub fn handle_class(mut self, class: impl Into<String>) -> Self {
        self.classes.handle = class.into();
        self
    }

    /// Enables the extra bar with the given class.
    pub fn extra_bar_class(mut self, class: impl Into<String>) -> Self {
        self.classes.extra_bar = Some(class.into());
        self
    }

    /// Sets the events that begin a drag.
    pub fn start_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.start_events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the events that move the handle.
    pub fn move_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.move_events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the events that end a drag.
    pub fn end_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.end_events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the host events treated as value changes.
    pub fn change_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.change_events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the window events treated as layout changes.
    pub fn resize_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resize_events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the attribute the secondary indicator is read from.
    pub fn secondary_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.secondary_attribute = attribute.into();
        self
    }

    /// Sets whether native range rendering suppresses construction.
    pub fn polyfill(mut self, polyfill: bool) -> Self {
        self.polyfill = polyfill;
        self
    }

    /// Sets the init handler.
    pub fn on_init<F>(mut self, on_init: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_init = Callback::new(on_init);
        self
    }

    /// Sets the slide-start handler.
    pub fn on_slide_start<F>(mut self, on_slide_start: F) -> Self
    where
        F: Fn(SlideEvent) + Send + Sync + 'static,
    {
        self.on_slide_start = CallbackWith::new(on_slide_start);
        self
    }

    /// Sets the slide handler.
    pub fn on_slide<F>(mut self, on_slide: F) -> Self
    where
        F: Fn(SlideEvent) + Send + Sync + 'static,
    {
        self.on_slide = CallbackWith::new(on_slide);
        self
    }

    /// Sets the slide-end handler.
    pub fn on_slide_end<F>(mut self, on_slide_end: F) -> Self
    where
        F: Fn(SlideEvent) + Send + Sync + 'static,
    {
        self.on_slide_end = CallbackWith::new(on_slide_end);
        self
    }

    /// Sets the init handler using a shared callback.
    pub fn on_init_shared(mut self, on_init: impl Into<Callback>) -> Self {
        self.on_init = on_init.into();
        self
    }

    /// Sets the slide-start handler using a shared callback.
    pub fn on_slide_start_shared(
        mut self,
        on_slide_start: impl Into<CallbackWith<SlideEvent>>,
    ) -> Self {
        self.on_slide_start = on_slide_start.into();
        self
    }

    /// Sets the slide handler using a shared callback.
    pub fn on_slide_shared(mut self, on_slide: impl Into<CallbackWith<SlideEvent>>) -> Self {
        self.on_slide = on_slide.into();
        self
    }

    /// Sets the slide-end handler using a shared callback.
    pub fn on_slide_end_shared(
        mut self,
        on_slide_end: impl Into<CallbackWith<SlideEvent>>,
    ) -> Self {
        self.on_slide_end = on_slide_end.into();
        self
    }
}
