//! Window - host environment
//!
//! Owns the document tree and listener table. Everything is reachable through
//! `&Window` so listeners can call back into the host while an event is being
//! dispatched; no borrow is held across a listener call.

use std::cell::{Cell, Ref, RefCell, RefMut};

use crate::{
    ComputedStyle, DOMRect, DomTree, Event, EventListener, HostError, ListenerRegistry, NodeId,
    Result, Target,
};

/// Which optional host facilities exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFeatures {
    /// `addEventListener` / `removeEventListener`
    pub event_listener: bool,
    /// `element.classList`
    pub class_list: bool,
    /// Legacy engine document mode (`document.documentMode`), absent on
    /// standards engines. Also gates `attachEvent`, `currentStyle` and
    /// `filters`; `getComputedStyle` exists only from mode 9 up.
    pub document_mode: Option<u32>,
}

impl HostFeatures {
    /// Standards engine with every modern facility
    pub const fn modern() -> Self {
        Self {
            event_listener: true,
            class_list: true,
            document_mode: None,
        }
    }

    /// Legacy engine in the given document mode
    pub const fn legacy(document_mode: u32) -> Self {
        Self {
            event_listener: document_mode >= 9,
            class_list: document_mode >= 10,
            document_mode: Some(document_mode),
        }
    }

    fn has_computed_style(&self) -> bool {
        self.document_mode.is_none_or(|mode| mode >= 9)
    }

    fn has_legacy_dom(&self) -> bool {
        self.document_mode.is_some()
    }
}

impl Default for HostFeatures {
    fn default() -> Self {
        Self::modern()
    }
}

/// Browser window with one document
#[derive(Debug)]
pub struct Window {
    dom: RefCell<DomTree>,
    listeners: RefCell<ListenerRegistry>,
    inner_width: Cell<f64>,
    inner_height: Cell<f64>,
    features: HostFeatures,
    body: NodeId,
}

impl Window {
    /// Default viewport width
    pub const DEFAULT_WIDTH: f64 = 1024.0;
    /// Default viewport height
    pub const DEFAULT_HEIGHT: f64 = 768.0;

    /// Create a window whose document holds `<html><head/><body/></html>`
    pub fn new(features: HostFeatures) -> Self {
        let mut dom = DomTree::new();
        let html = dom.create_element("html");
        let head = dom.create_element("head");
        let body = dom.create_element("body");
        dom.append_child(dom.root(), html);
        dom.append_child(html, head);
        dom.append_child(html, body);

        tracing::debug!(?features, "created host window");

        Self {
            dom: RefCell::new(dom),
            listeners: RefCell::new(ListenerRegistry::new()),
            inner_width: Cell::new(Self::DEFAULT_WIDTH),
            inner_height: Cell::new(Self::DEFAULT_HEIGHT),
            features,
            body,
        }
    }

    pub fn features(&self) -> HostFeatures {
        self.features
    }

    pub fn inner_width(&self) -> f64 {
        self.inner_width.get()
    }

    pub fn inner_height(&self) -> f64 {
        self.inner_height.get()
    }

    /// Change the viewport size
    pub fn resize(&self, width: f64, height: f64) {
        self.inner_width.set(width);
        self.inner_height.set(height);
    }

    // ---- tree ----

    /// Document node
    pub fn document(&self) -> NodeId {
        NodeId::ROOT
    }

    /// `<html>` element
    pub fn document_element(&self) -> Option<NodeId> {
        self.dom.borrow().document_element()
    }

    /// `<body>` element
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Read access to the tree
    pub fn dom(&self) -> Ref<'_, DomTree> {
        self.dom.borrow()
    }

    /// Write access to the tree
    pub fn dom_mut(&self) -> RefMut<'_, DomTree> {
        self.dom.borrow_mut()
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.dom.borrow_mut().create_element(tag)
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&self, parent: NodeId, tag: &str) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        let id = dom.create_element(tag);
        dom.append_child(parent, id);
        id
    }

    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        self.dom.borrow_mut().append_child(parent, child);
    }

    pub fn remove_child(&self, parent: NodeId, child: NodeId) -> bool {
        self.dom.borrow_mut().remove_child(parent, child)
    }

    /// `node.parentNode`
    pub fn parent_node(&self, id: NodeId) -> Option<NodeId> {
        self.dom.borrow().parent(id)
    }

    // ---- events ----

    /// `target.addEventListener(type, listener, capture)`
    pub fn add_event_listener(&self, target: Target, event_type: &str, listener: EventListener, capture: bool) -> Result<()> {
        if !self.features.event_listener {
            return Err(HostError::Unsupported("addEventListener"));
        }
        self.listeners.borrow_mut().add_listener(target, event_type, listener, capture);
        Ok(())
    }

    /// `target.removeEventListener(type, listener, capture)`
    pub fn remove_event_listener(&self, target: Target, event_type: &str, listener: &EventListener, capture: bool) -> Result<bool> {
        if !self.features.event_listener {
            return Err(HostError::Unsupported("removeEventListener"));
        }
        Ok(self.listeners.borrow_mut().remove_listener(target, event_type, listener, capture))
    }

    /// `target.attachEvent("on" + type, listener)`
    pub fn attach_event(&self, target: Target, on_name: &str, listener: EventListener) -> Result<()> {
        if !self.features.has_legacy_dom() {
            return Err(HostError::Unsupported("attachEvent"));
        }
        self.listeners.borrow_mut().attach(target, on_name, listener);
        Ok(())
    }

    /// `target.detachEvent("on" + type, listener)`
    pub fn detach_event(&self, target: Target, on_name: &str, listener: &EventListener) -> Result<bool> {
        if !self.features.has_legacy_dom() {
            return Err(HostError::Unsupported("detachEvent"));
        }
        Ok(self.listeners.borrow_mut().detach(target, on_name, listener))
    }

    /// Dispatch `event` at its target; returns how many listeners ran
    ///
    /// Listeners are snapshotted first, so a listener removed mid-dispatch
    /// still runs this time and one added mid-dispatch does not.
    pub fn dispatch_event(&self, event: &Event) -> usize {
        let listeners = self.listeners.borrow().listeners_for(event.target, &event.event_type);
        tracing::trace!(event = %event.event_type, target = ?event.target, count = listeners.len(), "dispatch");

        let mut current = event.clone();
        current.current_target = event.target;
        for listener in &listeners {
            listener.call(self, &current);
        }
        listeners.len()
    }

    /// Dispatch a plain event of `event_type` at `target`
    pub fn dispatch(&self, target: Target, event_type: &str) -> usize {
        self.dispatch_event(&Event::new(event_type, target))
    }

    /// Live subscription count on `target`
    pub fn listener_count(&self, target: Target) -> usize {
        self.listeners.borrow().count(target)
    }

    // ---- classes ----

    /// `element.className`
    pub fn class_name(&self, id: NodeId) -> Result<String> {
        Ok(self.dom.borrow().element(id)?.class_name.clone())
    }

    /// `element.setAttribute("class", value)`
    pub fn set_class_name(&self, id: NodeId, value: &str) -> Result<()> {
        self.dom.borrow_mut().element_mut(id)?.class_name = value.to_string();
        Ok(())
    }

    /// `element.classList.contains(token)`
    pub fn class_list_contains(&self, id: NodeId, token: &str) -> Result<bool> {
        self.require_class_list()?;
        Ok(self.dom.borrow().element(id)?.class_list().contains(token))
    }

    /// `element.classList.add(token)`
    pub fn class_list_add(&self, id: NodeId, token: &str) -> Result<bool> {
        self.require_class_list()?;
        let mut dom = self.dom.borrow_mut();
        let element = dom.element_mut(id)?;
        let mut list = element.class_list();
        let added = list.add(token);
        element.class_name = list.value();
        Ok(added)
    }

    /// `element.classList.remove(token)`
    pub fn class_list_remove(&self, id: NodeId, token: &str) -> Result<bool> {
        self.require_class_list()?;
        let mut dom = self.dom.borrow_mut();
        let element = dom.element_mut(id)?;
        let mut list = element.class_list();
        let removed = list.remove(token);
        element.class_name = list.value();
        Ok(removed)
    }

    fn require_class_list(&self) -> Result<()> {
        if self.features.class_list {
            Ok(())
        } else {
            Err(HostError::Unsupported("classList"))
        }
    }

    // ---- style ----

    /// `element.style[name]`, None when unset
    pub fn style_property(&self, id: NodeId, name: &str) -> Result<Option<String>> {
        Ok(self.dom.borrow().element(id)?.style.get(name).map(str::to_string))
    }

    /// `element.style[name] = value`; an empty value clears the property
    pub fn set_style_property(&self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.dom.borrow_mut().element_mut(id)?.style.set(name, value);
        Ok(())
    }

    /// Declare `name: value` for `id` as if it came from a stylesheet
    pub fn set_sheet_style(&self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.dom.borrow_mut().element_mut(id)?.sheet_style.set(name, value);
        Ok(())
    }

    /// `document.defaultView.getComputedStyle(element, "")`
    pub fn get_computed_style(&self, id: NodeId) -> Result<ComputedStyle> {
        if !self.features.has_computed_style() {
            return Err(HostError::Unsupported("getComputedStyle"));
        }
        let dom = self.dom.borrow();
        let element = dom.element(id)?;
        if !dom.is_connected(id) {
            return Err(HostError::Detached(id));
        }
        Ok(ComputedStyle::resolve(&element.sheet_style, &element.style))
    }

    /// `element.currentStyle`
    pub fn current_style(&self, id: NodeId) -> Result<ComputedStyle> {
        if !self.features.has_legacy_dom() {
            return Err(HostError::Unsupported("currentStyle"));
        }
        let dom = self.dom.borrow();
        let element = dom.element(id)?;
        Ok(ComputedStyle::resolve(&element.sheet_style, &element.style))
    }

    /// `element.filters.item("alpha").opacity` (0 to 100)
    pub fn alpha_opacity(&self, id: NodeId) -> Result<f64> {
        if !self.features.has_legacy_dom() {
            return Err(HostError::Unsupported("filters"));
        }
        let dom = self.dom.borrow();
        let filter = dom
            .element(id)?
            .style
            .get("filter")
            .ok_or(HostError::NoAlphaFilter(id))?;
        parse_alpha_opacity(filter)?.ok_or(HostError::NoAlphaFilter(id))
    }

    // ---- geometry ----

    /// `element.getBoundingClientRect()`
    pub fn bounding_client_rect(&self, id: NodeId) -> Result<DOMRect> {
        Ok(self.dom.borrow().element(id)?.rect)
    }

    /// Place `id` at `rect` (stands in for layout)
    pub fn set_bounding_rect(&self, id: NodeId, rect: DOMRect) -> Result<()> {
        self.dom.borrow_mut().element_mut(id)?.rect = rect;
        Ok(())
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(HostFeatures::modern())
    }
}

impl crate::ElementData {
    fn class_list(&self) -> crate::DOMTokenList {
        crate::DOMTokenList::from_string(&self.class_name)
    }
}

/// Opacity from an `alpha(opacity=N)` filter; Ok(None) if no alpha filter
fn parse_alpha_opacity(filter: &str) -> Result<Option<f64>> {
    let lower = filter.to_ascii_lowercase();
    let Some(start) = lower.find("alpha(") else {
        return Ok(None);
    };
    let args = &lower[start + "alpha(".len()..];
    let malformed = || HostError::MalformedFilter(filter.to_string());

    let end = args.find(')').ok_or_else(malformed)?;
    let value = args[..end]
        .split(',')
        .filter_map(|arg| arg.trim().strip_prefix("opacity"))
        .find_map(|rest| rest.trim_start().strip_prefix('='))
        .ok_or_else(malformed)?;
    value.trim().parse::<f64>().map(Some).map_err(|_| malformed())
}
