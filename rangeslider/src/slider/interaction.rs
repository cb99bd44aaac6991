use tracing::{debug, trace};

use crate::{
    host::{CHANGE_EVENT, ChangeEvent, HostElement},
    listeners::{EventTarget, Handler},
    px::Px,
    surface::{Part, Surface},
};

use super::{EventOutcome, RangeSlider, render};

/// State that only exists between a drag start and its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DragSession {
    /// Distance from the pointer to the handle's left edge.
    grab_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl<H: HostElement, S: Surface> RangeSlider<H, S> {
    /// Pointer offset relative to the track's left edge.
    fn track_offset(&self, x: Px) -> f64 {
        x.to_f64() - self.surface.left(Part::Range).to_f64()
    }

    pub(super) fn begin_drag(&mut self, x: Px) -> EventOutcome {
        if self.host.is_disabled() {
            trace!("drag start on disabled host");
            return EventOutcome::Ignored;
        }

        let offset = self.track_offset(x);
        let on_handle = self.geometry.hits_handle(self.position, offset);
        let grab_offset = if on_handle {
            offset - self.geometry.handle_start(self.position)
        } else {
            self.geometry.default_grab()
        };

        if !on_handle {
            self.move_handle(offset - grab_offset, false);
        }

        self.listeners.unlisten(EventTarget::Track, Handler::DragStart);
        debug_assert!(!self.listeners.is_listening(Handler::DragStart));
        self.listeners
            .listen(EventTarget::Document, &self.options.move_events, Handler::DragMove);
        self.listeners
            .listen(EventTarget::Document, &self.options.end_events, Handler::DragEnd);
        self.drag = DragState::Dragging(DragSession { grab_offset });
        render::render_active(&mut self.surface, &self.options.classes, true);

        debug!(grab_offset, on_handle, value = self.value, "drag started");
        self.options.on_slide_start.call(self.slide_event());
        EventOutcome::Consumed
    }

    pub(super) fn drag_to(&mut self, x: Px) -> EventOutcome {
        let DragState::Dragging(session) = self.drag else {
            return EventOutcome::Ignored;
        };
        let offset = self.track_offset(x);
        self.move_handle(offset - session.grab_offset, true);
        EventOutcome::Consumed
    }

    pub(super) fn end_drag(&mut self) -> EventOutcome {
        self.finish_drag(true);
        EventOutcome::Consumed
    }

    /// Returns to idle. `commit` announces the final value to the host.
    pub(super) fn finish_drag(&mut self, commit: bool) {
        if std::mem::take(&mut self.drag) == DragState::Idle {
            return;
        }

        self.listeners.unlisten(EventTarget::Document, Handler::DragMove);
        self.listeners.unlisten(EventTarget::Document, Handler::DragEnd);
        self.listeners
            .listen(EventTarget::Track, &self.options.start_events, Handler::DragStart);
        render::render_active(&mut self.surface, &self.options.classes, false);

        if commit {
            self.host.dispatch(ChangeEvent::from_slider(CHANGE_EVENT, self.id));
        }
        debug!(value = self.value, commit, "drag ended");
        self.options.on_slide_end.call(self.slide_event());
    }

    /// Moves the handle's left edge to `handle_offset` pixels into the track.
    fn move_handle(&mut self, handle_offset: f64, notify: bool) {
        let position = self.geometry.position_at(handle_offset);
        let value = self.range.position_to_value(position);
        self.apply_value(value);
        if notify {
            self.options.on_slide.call(self.slide_event());
        }
    }
}
