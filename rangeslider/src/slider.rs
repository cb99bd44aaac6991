//! The slider controller.
//!
//! ## Usage
//!
//! Construct a [`RangeSlider`] over a host element and a surface, mount it,
//! and forward environment events to [`RangeSlider::dispatch`].
//!
//! ```
//! use rangeslider::{
//!     EventTarget, HeadlessSurface, MemoryHost, Px, RangeSlider, SliderEvent, SliderOptions,
//! };
//!
//! let host = MemoryHost::new().with_attribute("max", "10").with_value("5");
//! let surface = HeadlessSurface::new(Px(110), Px(10));
//! let mut slider = RangeSlider::new(host, surface, SliderOptions::default());
//! slider.mount().unwrap();
//! assert_eq!(slider.position(), 0.5);
//!
//! slider.dispatch(EventTarget::Track, &SliderEvent::pointer("mousedown", Px(0)));
//! slider.dispatch(EventTarget::Document, &SliderEvent::pointer("mouseup", Px(0)));
//! assert_eq!(slider.value(), 0.0);
//! ```

use tracing::{debug, trace};

use crate::{
    error::SliderError,
    host::{ChangeEvent, HostElement, SliderId},
    listeners::{EventTarget, Handler, Listeners},
    options::SliderOptions,
    px::Px,
    range::{DomainRange, cap},
    surface::Surface,
};

pub use layout::Geometry;

use interaction::DragState;

mod interaction;
mod layout;
mod render;
mod sync;

/// Payload of the slide notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideEvent {
    /// Normalized handle position in `[0, 1]`.
    pub position: f64,
    /// Current value.
    pub value: f64,
}

/// Where a slider is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, nothing inserted or bound yet.
    Constructed,
    /// Visuals inserted, listeners bound, responding to events.
    Mounted,
    /// Torn down for good.
    Destroyed,
}

/// An event forwarded from the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderEvent {
    /// A mouse, touch or pointer event at horizontal page coordinate `x`.
    Pointer {
        /// Platform event name.
        name: String,
        /// Horizontal coordinate, in the same space as [`Surface::left`].
        x: Px,
    },
    /// A value-change notification from the host.
    Change(ChangeEvent),
    /// A layout change such as a viewport resize.
    Layout {
        /// Platform event name.
        name: String,
    },
}

impl SliderEvent {
    /// A pointer event.
    pub fn pointer(name: impl Into<String>, x: Px) -> Self {
        Self::Pointer {
            name: name.into(),
            x,
        }
    }

    /// A host value-change notification.
    pub fn change(event: ChangeEvent) -> Self {
        Self::Change(event)
    }

    /// A layout change.
    pub fn layout(name: impl Into<String>) -> Self {
        Self::Layout { name: name.into() }
    }

    /// The platform event name listeners are matched against.
    pub fn name(&self) -> &str {
        match self {
            Self::Pointer { name, .. } | Self::Layout { name } => name,
            Self::Change(change) => &change.name,
        }
    }
}

/// What the slider did with a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing listens to the event, or it was an echo of the slider's own
    /// write.
    Ignored,
    /// The event was handled.
    Handled,
    /// The event was handled and its default action (text selection,
    /// scrolling) must be suppressed.
    Consumed,
}

/// A custom slider mirroring the value of a numeric host element.
///
/// Dropping a slider destroys it.
pub struct RangeSlider<H: HostElement, S: Surface> {
    id: SliderId,
    host: H,
    surface: S,
    options: SliderOptions,
    range: DomainRange,
    value: f64,
    position: f64,
    secondary: f64,
    geometry: Geometry,
    drag: DragState,
    listeners: Listeners,
    lifecycle: Lifecycle,
}

impl<H: HostElement, S: Surface> RangeSlider<H, S> {
    /// Creates an unmounted slider for `host`, painting on `surface`.
    pub fn new(host: H, surface: S, options: SliderOptions) -> Self {
        let range = DomainRange::default();
        Self {
            id: SliderId::next(),
            host,
            surface,
            options,
            value: range.midpoint(),
            position: 0.5,
            secondary: range.min(),
            range,
            geometry: Geometry::default(),
            drag: DragState::Idle,
            listeners: Listeners::default(),
            lifecycle: Lifecycle::Constructed,
        }
    }

    /// Inserts the visuals, binds listeners and performs the initial sync.
    #[tracing::instrument(level = "debug", skip(self), fields(id = %self.id))]
    pub fn mount(&mut self) -> Result<(), SliderError> {
        match self.lifecycle {
            Lifecycle::Constructed => {}
            Lifecycle::Mounted => return Err(SliderError::AlreadyMounted),
            Lifecycle::Destroyed => return Err(SliderError::Destroyed),
        }

        self.host.conceal();
        self.surface.mount(&self.options.classes);
        self.listeners
            .listen(EventTarget::Track, &self.options.start_events, Handler::DragStart);
        self.listeners
            .listen(EventTarget::Host, &self.options.change_events, Handler::HostChange);
        self.listeners
            .listen(EventTarget::Window, &self.options.resize_events, Handler::Resize);
        self.lifecycle = Lifecycle::Mounted;

        self.update(true)?;
        debug!(value = self.value, min = self.range.min(), max = self.range.max(), "mounted");
        self.options.on_init.call();
        Ok(())
    }

    /// Routes an environment event to whichever handler is bound to it.
    ///
    /// Events nobody listens to, including everything after
    /// [`destroy`](Self::destroy), are ignored.
    pub fn dispatch(&mut self, target: EventTarget, event: &SliderEvent) -> EventOutcome {
        let Some(handler) = self.listeners.lookup(target, event.name()) else {
            trace!(?target, name = event.name(), "no listener");
            return EventOutcome::Ignored;
        };

        match (handler, event) {
            (Handler::DragStart, SliderEvent::Pointer { x, .. }) => self.begin_drag(*x),
            (Handler::DragMove, SliderEvent::Pointer { x, .. }) => self.drag_to(*x),
            (Handler::DragEnd, _) => self.end_drag(),
            (Handler::HostChange, SliderEvent::Change(change)) => self.on_host_change(change),
            (Handler::Resize, _) => self.on_resize(),
            _ => EventOutcome::Ignored,
        }
    }

    /// Unbinds everything, removes the visuals and restores the host.
    ///
    /// An active drag is ended first, emitting its slide-end notification.
    /// Destroying twice is a no-op.
    #[tracing::instrument(level = "debug", skip(self), fields(id = %self.id))]
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        if self.is_dragging() {
            self.finish_drag(false);
        }
        self.listeners.clear();
        if self.lifecycle == Lifecycle::Mounted {
            self.surface.unmount();
            self.host.restore();
        }
        self.lifecycle = Lifecycle::Destroyed;
    }

    /// Identity used to tag this slider's own host writes.
    pub fn id(&self) -> SliderId {
        self.id
    }

    /// Current lifecycle stage.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current normalized handle position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current secondary indicator value.
    pub fn secondary_value(&self) -> f64 {
        self.secondary
    }

    /// Constraints last read from the host.
    pub fn range(&self) -> DomainRange {
        self.range
    }

    /// Pixel geometry from the last update.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// The options the slider was built with.
    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// The host element.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to simulate layout changes.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn ensure_mounted(&self) -> Result<(), SliderError> {
        match self.lifecycle {
            Lifecycle::Mounted => Ok(()),
            Lifecycle::Constructed => Err(SliderError::NotMounted),
            Lifecycle::Destroyed => Err(SliderError::Destroyed),
        }
    }

    fn slide_event(&self) -> SlideEvent {
        SlideEvent {
            position: self.position,
            value: self.value,
        }
    }

    fn render(&mut self) {
        let extra = self
            .options
            .classes
            .extra_bar
            .as_ref()
            .map(|_| cap(self.range.value_to_position(self.secondary), 0.0, 1.0));
        let frame = render::frame(self.position, extra);
        self.surface.paint(&frame);
    }
}

impl<H: HostElement, S: Surface> Drop for RangeSlider<H, S> {
    fn drop(&mut self) {
        self.destroy();
    }
}
