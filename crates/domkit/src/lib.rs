//! domkit - cross-engine DOM helpers
//!
//! Event binding, class tokens, style access and scroll-container discovery
//! for UI components, over hosts that may be a standards engine, a legacy
//! engine or no window at all (server rendering).
//!
//! [`DomKit`] probes the host once and builds every component with the
//! strategy that host needs:
//!
//! ```
//! use std::rc::Rc;
//! use domkit::{DomKit, ScrollAxis, Target};
//! use domkit_dom::Window;
//!
//! let window = Rc::new(Window::default());
//! let list = window.append_element(window.body(), "ul");
//! let kit = DomKit::new(Some(window));
//!
//! kit.classes().add(Some(list), "menu open");
//! assert_eq!(kit.classes().has(Some(list), "open"), Ok(true));
//! assert_eq!(
//!     kit.scroll().nearest_scroll_container(Some(Target::Node(list)), ScrollAxis::Vertical),
//!     Some(Target::Window)
//! );
//! ```

mod capability;
mod class_set;
mod config;
mod engine;
mod error;
mod events;
mod scroll;
mod style;
pub mod text;

use std::rc::Rc;

pub use capability::{Capabilities, CapabilityProbe, MODERN_STYLE_ENGINE_VERSION};
pub use class_set::{ClassModel, ClassSet};
pub use config::Config;
pub use engine::{LegacyEngine, ModernEngine, StyleEngine};
pub use error::{DomKitError, Result};
pub use events::{EventBinder, EventModel};
pub use scroll::{Rect, ScrollAxis, ScrollResolver};
pub use style::{StyleAccessor, StyleValue};

pub use domkit_dom::{Event, EventListener, NodeId, Target, Window};

/// domkit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// All components, wired to one host
#[derive(Debug)]
pub struct DomKit {
    probe: CapabilityProbe,
    config: Config,
    events: EventBinder,
    classes: ClassSet,
    style: StyleAccessor,
    scroll: ScrollResolver,
}

impl DomKit {
    /// Wire components for `host` (None for a non-interactive context)
    pub fn new(host: Option<Rc<Window>>) -> Self {
        Self::with_config(host, Config::default())
    }

    /// Wire components for `host` with explicit configuration
    pub fn with_config(host: Option<Rc<Window>>, config: Config) -> Self {
        let probe = CapabilityProbe::new(host.clone());
        let caps = probe.capabilities();

        let events = EventBinder::new(host.clone(), caps.event_model());
        let classes = ClassSet::new(host.clone(), caps.class_model());
        let style = StyleAccessor::new(host.clone(), caps.style_engine());
        let scroll = ScrollResolver::new(host, style.clone(), config.max_ancestor_depth);

        tracing::debug!(
            events = ?events.model(),
            classes = ?classes.model(),
            style = style.engine().name(),
            "domkit ready"
        );

        Self {
            probe,
            config,
            events,
            classes,
            style,
            scroll,
        }
    }

    /// Flags the components were built from
    pub fn capabilities(&self) -> Capabilities {
        self.probe.capabilities()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The host window, if any
    pub fn window(&self) -> Option<&Rc<Window>> {
        self.probe.host()
    }

    pub fn events(&self) -> &EventBinder {
        &self.events
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn style(&self) -> &StyleAccessor {
        &self.style
    }

    pub fn scroll(&self) -> &ScrollResolver {
        &self.scroll
    }
}
