//! Event binding
//!
//! `bind` / `unbind` / `bind_once` over whichever subscription model the host
//! supports. Malformed calls (no target, empty event name, no handler) do
//! nothing; so do host refusals.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use domkit_dom::{Event, EventListener, Target, WeakListener, Window};

/// Subscription strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventModel {
    /// `addEventListener(type, handler, false)`
    Listener,
    /// `attachEvent("on" + type, handler)`
    Attach,
}

impl EventModel {
    fn subscribe(self, window: &Window, target: Target, event_name: &str, handler: EventListener) {
        let result = match self {
            EventModel::Listener => window.add_event_listener(target, event_name, handler, false),
            EventModel::Attach => window.attach_event(target, &format!("on{event_name}"), handler),
        };
        if let Err(err) = result {
            tracing::trace!(?target, event = event_name, %err, "bind declined");
        }
    }

    fn unsubscribe(self, window: &Window, target: Target, event_name: &str, handler: &EventListener) {
        let result = match self {
            EventModel::Listener => window.remove_event_listener(target, event_name, handler, false),
            EventModel::Attach => window.detach_event(target, &format!("on{event_name}"), handler),
        };
        match result {
            Ok(true) => {}
            Ok(false) => tracing::trace!(?target, event = event_name, "unbind matched nothing"),
            Err(err) => tracing::trace!(?target, event = event_name, %err, "unbind declined"),
        }
    }
}

/// Binds handlers to elements
#[derive(Debug, Clone)]
pub struct EventBinder {
    host: Option<Rc<Window>>,
    model: EventModel,
}

impl EventBinder {
    pub fn new(host: Option<Rc<Window>>, model: EventModel) -> Self {
        Self { host, model }
    }

    pub fn model(&self) -> EventModel {
        self.model
    }

    /// Register `handler` for `event_name` on `target`
    pub fn bind(&self, target: Option<Target>, event_name: &str, handler: Option<&EventListener>) {
        let (Some(window), Some(target), Some(handler)) = (self.host.as_deref(), target, handler) else {
            return;
        };
        if event_name.is_empty() {
            return;
        }
        self.model.subscribe(window, target, event_name, handler.clone());
    }

    /// Remove a registration made by [`bind`](Self::bind)
    pub fn unbind(&self, target: Option<Target>, event_name: &str, handler: Option<&EventListener>) {
        let (Some(window), Some(target)) = (self.host.as_deref(), target) else {
            return;
        };
        if event_name.is_empty() {
            return;
        }
        match handler {
            Some(handler) => self.model.unsubscribe(window, target, event_name, handler),
            None => tracing::trace!(?target, event = event_name, "unbind without handler"),
        }
    }

    /// Register `handler` for a single dispatch
    ///
    /// The registered wrapper calls `handler` with `target` as the current
    /// target, then removes itself. It holds no strong reference to the host.
    pub fn bind_once(&self, target: Option<Target>, event_name: &str, handler: Option<EventListener>) {
        let (Some(_), Some(target)) = (self.host.as_deref(), target) else {
            return;
        };
        if event_name.is_empty() {
            return;
        }

        let model = self.model;
        let name = event_name.to_string();
        let this: Rc<RefCell<Option<WeakListener>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&this);
        let fired = Cell::new(false);

        let wrapper = EventListener::new(move |window, event| {
            if fired.replace(true) {
                return;
            }
            if let Some(handler) = &handler {
                let event = Event {
                    current_target: target,
                    ..event.clone()
                };
                handler.call(window, &event);
            }
            let me = slot.borrow().as_ref().and_then(WeakListener::upgrade);
            if let Some(me) = me {
                model.unsubscribe(window, target, &name, &me);
            }
        });
        *this.borrow_mut() = Some(wrapper.downgrade());

        self.bind(Some(target), event_name, Some(&wrapper));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domkit_dom::{HostFeatures, NodeId};

    fn counter() -> (Rc<Cell<u32>>, EventListener) {
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        let listener = EventListener::new(move |_, _| inner.set(inner.get() + 1));
        (hits, listener)
    }

    fn setup(features: HostFeatures, model: EventModel) -> (Rc<Window>, EventBinder, Target) {
        let window = Rc::new(Window::new(features));
        let button = window.append_element(window.body(), "button");
        let binder = EventBinder::new(Some(Rc::clone(&window)), model);
        (window, binder, Target::Node(button))
    }

    #[test]
    fn test_bind_modern() {
        let (window, binder, button) = setup(HostFeatures::modern(), EventModel::Listener);
        let (hits, handler) = counter();

        binder.bind(Some(button), "click", Some(&handler));
        window.dispatch(button, "click");
        window.dispatch(button, "click");
        assert_eq!(hits.get(), 2);

        binder.unbind(Some(button), "click", Some(&handler));
        window.dispatch(button, "click");
        assert_eq!(hits.get(), 2);
        assert_eq!(window.listener_count(button), 0);
    }

    #[test]
    fn test_bind_legacy_uses_on_prefix() {
        let (window, binder, button) = setup(HostFeatures::legacy(8), EventModel::Attach);
        let (hits, handler) = counter();

        binder.bind(Some(button), "click", Some(&handler));
        assert_eq!(window.dispatch(button, "click"), 1);
        assert_eq!(hits.get(), 1);

        binder.unbind(Some(button), "click", Some(&handler));
        assert_eq!(window.listener_count(button), 0);
    }

    #[test]
    fn test_double_bind_registers_twice() {
        let (window, binder, button) = setup(HostFeatures::modern(), EventModel::Listener);
        let (hits, handler) = counter();

        binder.bind(Some(button), "click", Some(&handler));
        binder.bind(Some(button), "click", Some(&handler));
        window.dispatch(button, "click");
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_missing_arguments_are_ignored() {
        let (window, binder, button) = setup(HostFeatures::modern(), EventModel::Listener);
        let (_, handler) = counter();

        binder.bind(None, "click", Some(&handler));
        binder.bind(Some(button), "", Some(&handler));
        binder.bind(Some(button), "click", None);
        assert_eq!(window.listener_count(button), 0);

        binder.bind(Some(button), "click", Some(&handler));
        binder.unbind(Some(button), "click", None);
        binder.unbind(None, "click", Some(&handler));
        assert_eq!(window.listener_count(button), 1);
    }

    #[test]
    fn test_non_interactive_is_noop() {
        let binder = EventBinder::new(None, EventModel::Attach);
        let (hits, handler) = counter();
        binder.bind(Some(Target::Window), "scroll", Some(&handler));
        binder.bind_once(Some(Target::Node(NodeId::ROOT)), "click", Some(handler.clone()));
        binder.unbind(Some(Target::Window), "scroll", Some(&handler));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_bind_once_fires_once() {
        for (features, model) in [
            (HostFeatures::modern(), EventModel::Listener),
            (HostFeatures::legacy(8), EventModel::Attach),
        ] {
            let (window, binder, button) = setup(features, model);
            let (hits, handler) = counter();

            binder.bind_once(Some(button), "click", Some(handler));
            assert_eq!(window.listener_count(button), 1);

            window.dispatch(button, "click");
            window.dispatch(button, "click");
            assert_eq!(hits.get(), 1);
            assert_eq!(window.listener_count(button), 0);
        }
    }

    #[test]
    fn test_bind_once_passes_element_as_current_target() {
        let (window, binder, button) = setup(HostFeatures::modern(), EventModel::Listener);
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let handler = EventListener::new(move |_, event: &Event| {
            *sink.borrow_mut() = Some((event.current_target, event.detail.clone()));
        });

        binder.bind_once(Some(button), "click", Some(handler));
        window.dispatch_event(&Event::new("click", button).with_detail("payload"));
        assert_eq!(*seen.borrow(), Some((button, Some("payload".to_string()))));
    }

    #[test]
    fn test_bind_once_does_not_retain_window() {
        let (window, binder, button) = setup(HostFeatures::modern(), EventModel::Listener);
        let (hits, handler) = counter();
        binder.bind_once(Some(button), "click", Some(handler));
        drop(binder);

        // The wrapper must not keep the window alive
        assert_eq!(Rc::strong_count(&window), 1);
        window.dispatch(button, "click");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_bind_once_without_handler_still_cleans_up() {
        let (window, binder, button) = setup(HostFeatures::modern(), EventModel::Listener);
        binder.bind_once(Some(button), "focus", None);
        assert_eq!(window.dispatch(button, "focus"), 1);
        assert_eq!(window.listener_count(button), 0);
    }
}
