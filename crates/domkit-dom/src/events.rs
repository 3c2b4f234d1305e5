//! Event listeners
//!
//! Subscription table shared by the standard listener model
//! (`addEventListener`) and the legacy attach model (`attachEvent("onclick")`).

use std::fmt;
use std::rc::{Rc, Weak};

use crate::{Target, Window};

type Callback = dyn Fn(&Window, &Event);

/// An event being dispatched
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Event type name (e.g. `"click"`)
    pub event_type: String,
    /// Where the event was dispatched
    pub target: Target,
    /// Whose listener is currently running
    pub current_target: Target,
    /// Free-form payload supplied by the dispatcher
    pub detail: Option<String>,
}

impl Event {
    pub fn new(event_type: &str, target: Target) -> Self {
        Self {
            event_type: event_type.to_string(),
            target,
            current_target: target,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

/// Shared handle to a listener callback
///
/// Identity is the allocation: clones compare equal, two separately
/// created listeners never do.
#[derive(Clone)]
pub struct EventListener(Rc<Callback>);

impl EventListener {
    pub fn new(f: impl Fn(&Window, &Event) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback
    pub fn call(&self, window: &Window, event: &Event) {
        (self.0)(window, event)
    }

    /// Non-owning handle, used by listeners that need to refer to themselves
    pub fn downgrade(&self) -> WeakListener {
        WeakListener(Rc::downgrade(&self.0))
    }
}

impl PartialEq for EventListener {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for EventListener {}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventListener({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Weak counterpart of [`EventListener`]
#[derive(Clone)]
pub struct WeakListener(Weak<Callback>);

impl WeakListener {
    pub fn upgrade(&self) -> Option<EventListener> {
        self.0.upgrade().map(EventListener)
    }
}

impl fmt::Debug for WeakListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakListener")
    }
}

#[derive(Debug, Clone)]
struct Registration {
    target: Target,
    /// `"click"` for standard listeners, `"onclick"` for attached handlers
    name: String,
    listener: EventListener,
    capture: bool,
    legacy: bool,
}

/// All subscriptions known to a window
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    entries: Vec<Registration>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a standard listener. Duplicates are kept.
    pub fn add_listener(&mut self, target: Target, event_type: &str, listener: EventListener, capture: bool) {
        self.entries.push(Registration {
            target,
            name: event_type.to_string(),
            listener,
            capture,
            legacy: false,
        });
    }

    /// Remove every standard registration matching all three keys
    pub fn remove_listener(&mut self, target: Target, event_type: &str, listener: &EventListener, capture: bool) -> bool {
        self.remove_where(|r| {
            !r.legacy && r.target == target && r.name == event_type && r.capture == capture && &r.listener == listener
        })
    }

    /// Register a legacy handler under its `on`-prefixed name
    pub fn attach(&mut self, target: Target, on_name: &str, listener: EventListener) {
        self.entries.push(Registration {
            target,
            name: on_name.to_string(),
            listener,
            capture: false,
            legacy: true,
        });
    }

    /// Remove legacy handlers registered under `on_name`
    pub fn detach(&mut self, target: Target, on_name: &str, listener: &EventListener) -> bool {
        self.remove_where(|r| r.legacy && r.target == target && r.name == on_name && &r.listener == listener)
    }

    fn remove_where(&mut self, matches: impl Fn(&Registration) -> bool) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| !matches(r));
        self.entries.len() != before
    }

    /// Listeners that fire for `event_type` on `target`, in registration order
    pub fn listeners_for(&self, target: Target, event_type: &str) -> Vec<EventListener> {
        self.entries
            .iter()
            .filter(|r| r.target == target)
            .filter(|r| {
                if r.legacy {
                    r.name.strip_prefix("on") == Some(event_type)
                } else {
                    r.name == event_type
                }
            })
            .map(|r| r.listener.clone())
            .collect()
    }

    /// Number of live subscriptions on `target`
    pub fn count(&self, target: Target) -> usize {
        self.entries.iter().filter(|r| r.target == target).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
