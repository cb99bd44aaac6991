//! The host element a slider mirrors.
//!
//! A host is the numeric input whose value the slider visualizes. The slider
//! reads `min`, `max`, `step` and the secondary indicator from its attributes,
//! writes `value` back while dragging, and announces every write with a
//! [`ChangeEvent`] tagged by [`ChangeOrigin`] so it can recognize its own
//! echoes.
//!
//! [`MemoryHost`] is a shared, in-memory host used by the example binary and
//! the tests. Clones refer to the same element.

use std::{
    collections::HashMap,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use parking_lot::RwLock;

/// Notification dispatched for every value write made by the slider.
pub const INPUT_EVENT: &str = "input";
/// Notification dispatched when a drag commits its final value.
pub const CHANGE_EVENT: &str = "change";

/// Process-unique identity of a slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(u64);

impl SliderId {
    pub(crate) fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rangeslider-{}", self.0)
    }
}

/// Who caused a host value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeOrigin {
    /// Written by the slider with this identity.
    Slider(SliderId),
    /// Anything else: user typing, application code, another widget.
    External,
}

/// A value-change notification on the host element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Platform event name, e.g. `"input"` or `"change"`.
    pub name: String,
    /// Who caused the change.
    pub origin: ChangeOrigin,
}

impl ChangeEvent {
    /// A change caused outside of any slider.
    pub fn external(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: ChangeOrigin::External,
        }
    }

    /// A change caused by the slider `id`.
    pub fn from_slider(name: impl Into<String>, id: SliderId) -> Self {
        Self {
            name: name.into(),
            origin: ChangeOrigin::Slider(id),
        }
    }

    /// Whether this notification is the echo of a write made by `id`.
    pub fn is_echo_of(&self, id: SliderId) -> bool {
        self.origin == ChangeOrigin::Slider(id)
    }
}

/// The input-like element a slider is attached to.
pub trait HostElement {
    /// Reads an attribute, `None` when absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Current value as text; empty when unset.
    fn value(&self) -> String;

    /// Replaces the current value without notifying anyone.
    fn set_value(&mut self, value: &str);

    /// Whether the element is disabled.
    fn is_disabled(&self) -> bool;

    /// Dispatches a change notification to the element's listeners.
    fn dispatch(&mut self, event: ChangeEvent);

    /// Visually hides the element while a slider stands in for it.
    fn conceal(&mut self);

    /// Undoes [`conceal`](Self::conceal).
    fn restore(&mut self);

    /// Reads the secondary indicator value.
    ///
    /// Hosts exposing it as a property override this; the default reads the
    /// given attribute.
    fn secondary_value(&self, attribute: &str) -> Option<String> {
        self.attribute(attribute)
    }
}

#[derive(Debug, Default)]
struct HostState {
    attributes: HashMap<String, String>,
    value: String,
    secondary: Option<String>,
    disabled: bool,
    concealed: bool,
    dispatched: Vec<ChangeEvent>,
}

/// An in-memory [`HostElement`].
///
/// Dispatched notifications are recorded rather than delivered; whoever owns
/// the event loop forwards them to the slider with
/// [`RangeSlider::dispatch`](crate::RangeSlider::dispatch).
///
/// ```
/// use rangeslider::{HostElement, MemoryHost};
///
/// let host = MemoryHost::new().with_attribute("max", "10").with_value("4");
/// let mut handle = host.clone();
/// handle.set_value("6");
/// assert_eq!(host.value(), "6");
/// ```
#[derive(Clone, Default)]
pub struct MemoryHost {
    inner: Arc<RwLock<HostState>>,
}

impl fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemoryHost").field(&*self.inner.read()).finish()
    }
}

impl MemoryHost {
    /// Creates an empty host with no attributes and no value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, builder style.
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Sets the value, builder style.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.inner.write().value = value.into();
        self
    }

    /// Marks the element disabled, builder style.
    pub fn with_disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Sets an attribute.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner
            .write()
            .attributes
            .insert(name.into(), value.into());
    }

    /// Removes an attribute.
    pub fn remove_attribute(&self, name: &str) {
        self.inner.write().attributes.remove(name);
    }

    /// Sets the secondary indicator as a property, taking precedence over the
    /// attribute.
    pub fn set_secondary_property(&self, value: Option<String>) {
        self.inner.write().secondary = value;
    }

    /// Toggles the disabled flag.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.write().disabled = disabled;
    }

    /// Whether a slider currently conceals this element.
    pub fn is_concealed(&self) -> bool {
        self.inner.read().concealed
    }

    /// Every notification dispatched so far, oldest first.
    pub fn dispatched(&self) -> Vec<ChangeEvent> {
        self.inner.read().dispatched.clone()
    }

    /// Drains the recorded notifications.
    pub fn take_dispatched(&self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.inner.write().dispatched)
    }
}

impl HostElement for MemoryHost {
    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.read().attributes.get(name).cloned()
    }

    fn value(&self) -> String {
        self.inner.read().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.inner.write().value = value.to_owned();
    }

    fn is_disabled(&self) -> bool {
        self.inner.read().disabled
    }

    fn dispatch(&mut self, event: ChangeEvent) {
        self.inner.write().dispatched.push(event);
    }

    fn conceal(&mut self) {
        self.inner.write().concealed = true;
    }

    fn restore(&mut self) {
        self.inner.write().concealed = false;
    }

    fn secondary_value(&self, attribute: &str) -> Option<String> {
        let state = self.inner.read();
        state
            .secondary
            .clone()
            .or_else(|| state.attributes.get(attribute).cloned())
    }
}
