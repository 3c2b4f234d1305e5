//! Capability probe
//!
//! Works out once which event, class and style facilities the host offers.
//! Components never probe the host themselves; they receive the strategy
//! picked here.

use std::cell::OnceCell;
use std::rc::Rc;
use std::sync::OnceLock;

use domkit_dom::Window;
use serde::{Deserialize, Serialize};

use crate::class_set::ClassModel;
use crate::engine::{LegacyEngine, ModernEngine, StyleEngine};
use crate::events::EventModel;

/// Document modes below this use the legacy style engine
pub const MODERN_STYLE_ENGINE_VERSION: u32 = 9;

static PROCESS_CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();
static MODERN_ENGINE: ModernEngine = ModernEngine;
static LEGACY_ENGINE: LegacyEngine = LegacyEngine;

/// Host capability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// No live window/document (server-side rendering)
    pub is_non_interactive: bool,
    /// `addEventListener` rather than `attachEvent`
    pub supports_modern_event_model: bool,
    /// Native `classList` rather than the raw `class` attribute
    pub supports_token_class_list: bool,
    /// Legacy document mode; 0 when undetectable or non-interactive
    pub legacy_style_engine_version: u32,
}

impl Capabilities {
    /// Flags for a context without a window
    pub const fn non_interactive() -> Self {
        Self {
            is_non_interactive: true,
            supports_modern_event_model: false,
            supports_token_class_list: false,
            legacy_style_engine_version: 0,
        }
    }

    /// Inspect `host`
    pub fn detect(host: Option<&Window>) -> Self {
        let Some(window) = host else {
            return Self::non_interactive();
        };
        let features = window.features();
        Self {
            is_non_interactive: false,
            supports_modern_event_model: features.event_listener,
            supports_token_class_list: features.class_list,
            legacy_style_engine_version: features.document_mode.unwrap_or(0),
        }
    }

    /// Process-wide flags: the first caller's host decides, later hosts are ignored
    pub fn process_wide(host: Option<&Window>) -> Self {
        *PROCESS_CAPABILITIES.get_or_init(|| {
            let caps = Self::detect(host);
            tracing::debug!(?caps, "process-wide capabilities fixed");
            caps
        })
    }

    /// Whether style reads/writes go through the legacy engine
    pub fn uses_legacy_style_engine(&self) -> bool {
        self.legacy_style_engine_version != 0
            && self.legacy_style_engine_version < MODERN_STYLE_ENGINE_VERSION
    }

    /// Event subscription strategy
    pub fn event_model(&self) -> EventModel {
        if self.supports_modern_event_model {
            EventModel::Listener
        } else {
            EventModel::Attach
        }
    }

    /// Class mutation strategy
    pub fn class_model(&self) -> ClassModel {
        if self.supports_token_class_list {
            ClassModel::TokenList
        } else {
            ClassModel::Attribute
        }
    }

    /// Style read/write strategy
    pub fn style_engine(&self) -> &'static dyn StyleEngine {
        if self.uses_legacy_style_engine() {
            &LEGACY_ENGINE
        } else {
            &MODERN_ENGINE
        }
    }
}

/// Lazily computes [`Capabilities`] for one host, exactly once
#[derive(Debug)]
pub struct CapabilityProbe {
    host: Option<Rc<Window>>,
    flags: OnceCell<Capabilities>,
}

impl CapabilityProbe {
    pub fn new(host: Option<Rc<Window>>) -> Self {
        Self {
            host,
            flags: OnceCell::new(),
        }
    }

    /// Flags for the probed host; computed on first call, fixed afterwards
    pub fn capabilities(&self) -> Capabilities {
        *self.flags.get_or_init(|| {
            let caps = Capabilities::detect(self.host.as_deref());
            tracing::debug!(
                non_interactive = caps.is_non_interactive,
                modern_events = caps.supports_modern_event_model,
                class_list = caps.supports_token_class_list,
                style_engine = caps.style_engine().name(),
                "capabilities detected"
            );
            caps
        })
    }

    pub fn host(&self) -> Option<&Rc<Window>> {
        self.host.as_ref()
    }
}
