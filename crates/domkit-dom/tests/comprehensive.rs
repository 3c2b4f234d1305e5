//! Comprehensive tests for domkit-dom
//!
//! Tree wiring, feature gating and re-entrant dispatch.

use std::cell::Cell;
use std::rc::Rc;

use domkit_dom::{DOMRect, Event, EventListener, HostError, HostFeatures, NodeId, Target, Window};

#[test]
fn test_nested_structure() {
    let window = Window::default();
    let nav = window.append_element(window.body(), "nav");
    let ul = window.append_element(nav, "ul");
    let li = window.append_element(ul, "li");

    let mut chain = vec![li];
    let mut current = li;
    while let Some(parent) = window.parent_node(current) {
        chain.push(parent);
        current = parent;
    }
    assert_eq!(chain.last(), Some(&NodeId::ROOT));
    assert_eq!(chain.len(), 6);
    assert!(window.dom().is_connected(li));
}

#[test]
fn test_listener_added_during_dispatch_waits_for_next_event() {
    let window = Rc::new(Window::default());
    let hits = Rc::new(Cell::new(0));

    let late_hits = Rc::clone(&hits);
    let late = EventListener::new(move |_, _| late_hits.set(late_hits.get() + 10));
    let adder = EventListener::new(move |window, event| {
        window
            .add_event_listener(event.current_target, "ping", late.clone(), false)
            .unwrap();
    });
    window.add_event_listener(Target::Window, "ping", adder, false).unwrap();

    assert_eq!(window.dispatch(Target::Window, "ping"), 1);
    assert_eq!(hits.get(), 0);
    assert_eq!(window.dispatch(Target::Window, "ping"), 2);
    assert_eq!(hits.get(), 10);
}

#[test]
fn test_listener_removed_during_dispatch_still_runs_once() {
    let window = Window::default();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let victim = EventListener::new(move |_, _| counter.set(counter.get() + 1));

    let target = victim.clone();
    let remover = EventListener::new(move |window, event| {
        window
            .remove_event_listener(event.current_target, &event.event_type, &target, false)
            .unwrap();
    });
    window.add_event_listener(Target::Window, "tick", remover, false).unwrap();
    window.add_event_listener(Target::Window, "tick", victim, false).unwrap();

    window.dispatch(Target::Window, "tick");
    window.dispatch(Target::Window, "tick");
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_event_detail_reaches_listener() {
    let window = Window::default();
    let seen = Rc::new(Cell::new(false));
    let flag = Rc::clone(&seen);
    let listener = EventListener::new(move |_, event| flag.set(event.detail.as_deref() == Some("42")));
    window.add_event_listener(Target::Window, "custom", listener, false).unwrap();

    window.dispatch_event(&Event::new("custom", Target::Window).with_detail("42"));
    assert!(seen.get());
}

#[test]
fn test_ie8_host_surface() {
    let window = Window::new(HostFeatures::legacy(8));
    let div = window.append_element(window.body(), "div");

    assert!(window.get_computed_style(div).is_err());
    assert!(window.current_style(div).is_ok());
    assert_eq!(window.class_list_contains(div, "a"), Err(HostError::Unsupported("classList")));
    window.set_class_name(div, "a").unwrap();
    assert_eq!(window.class_name(div).unwrap(), "a");
}

#[test]
fn test_geometry_and_viewport() {
    let window = Window::default();
    assert_eq!(window.inner_width(), Window::DEFAULT_WIDTH);
    window.resize(320.0, 480.0);
    assert_eq!((window.inner_width(), window.inner_height()), (320.0, 480.0));

    let div = window.append_element(window.body(), "div");
    let rect = DOMRect::from_xywh(1.0, 2.0, 3.0, 4.0);
    window.set_bounding_rect(div, rect).unwrap();
    assert_eq!(window.bounding_client_rect(div), Ok(rect));
    assert_eq!(
        window.bounding_client_rect(NodeId::ROOT),
        Err(HostError::NotAnElement(NodeId::ROOT))
    );
}
