//! Listen/unlisten bookkeeping.
//!
//! A slider only reacts to events it currently listens to. Binding and
//! unbinding handlers as the drag state changes is what keeps a second drag
//! from starting while one is active: the start handler simply is not bound
//! during a drag.

use smallvec::SmallVec;

/// Where an event was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The slider track.
    Track,
    /// The document the slider lives in; drag moves and ends land here.
    Document,
    /// The host element.
    Host,
    /// The window; layout changes land here.
    Window,
}

/// Which slider routine an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handler {
    DragStart,
    DragMove,
    DragEnd,
    HostChange,
    Resize,
}

#[derive(Debug, Clone)]
struct Binding {
    target: EventTarget,
    name: String,
    handler: Handler,
}

#[derive(Debug, Default)]
pub(crate) struct Listeners {
    bindings: SmallVec<[Binding; 16]>,
}

impl Listeners {
    /// Binds `handler` to every event in `names` on `target`.
    pub(crate) fn listen(&mut self, target: EventTarget, names: &[String], handler: Handler) {
        for name in names {
            let bound = self
                .bindings
                .iter()
                .any(|b| b.target == target && b.handler == handler && b.name == *name);
            if !bound {
                self.bindings.push(Binding {
                    target,
                    name: name.clone(),
                    handler,
                });
            }
        }
    }

    /// Unbinds `handler` from all of its events on `target`.
    pub(crate) fn unlisten(&mut self, target: EventTarget, handler: Handler) {
        self.bindings.retain(|b| !(b.target == target && b.handler == handler));
    }

    /// The handler bound to `name` on `target`, if any.
    pub(crate) fn lookup(&self, target: EventTarget, name: &str) -> Option<Handler> {
        self.bindings
            .iter()
            .find(|b| b.target == target && b.name == name)
            .map(|b| b.handler)
    }

    /// Whether `handler` is bound to anything.
    pub(crate) fn is_listening(&self, handler: Handler) -> bool {
        self.bindings.iter().any(|b| b.handler == handler)
    }

    /// Unbinds everything.
    pub(crate) fn clear(&mut self) {
        self.bindings.clear();
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn lookup_respects_target() {
        let mut listeners = Listeners::default();
        listeners.listen(EventTarget::Track, &names(&["mousedown"]), Handler::DragStart);
        assert_eq!(
            listeners.lookup(EventTarget::Track, "mousedown"),
            Some(Handler::DragStart)
        );
        assert_eq!(listeners.lookup(EventTarget::Document, "mousedown"), None);
        assert_eq!(listeners.lookup(EventTarget::Track, "mouseup"), None);
    }

    #[test]
    fn unlisten_removes_only_that_handler() {
        let mut listeners = Listeners::default();
        listeners.listen(
            EventTarget::Document,
            &names(&["mousemove", "touchmove"]),
            Handler::DragMove,
        );
        listeners.listen(EventTarget::Document, &names(&["mouseup"]), Handler::DragEnd);
        listeners.unlisten(EventTarget::Document, Handler::DragMove);
        assert!(!listeners.is_listening(Handler::DragMove));
        assert!(listeners.is_listening(Handler::DragEnd));
        listeners.clear();
        assert!(listeners.is_empty());
    }

    #[test]
    fn duplicate_names_bind_once() {
        let mut listeners = Listeners::default();
        let list = names(&["change", "change"]);
        listeners.listen(EventTarget::Host, &list, Handler::HostChange);
        listeners.listen(EventTarget::Host, &list, Handler::HostChange);
        listeners.unlisten(EventTarget::Host, Handler::HostChange);
        assert!(listeners.is_empty());
    }
}
