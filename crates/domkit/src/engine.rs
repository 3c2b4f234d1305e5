//! Style engines
//!
//! The two ways a host resolves and writes style: standards engines expose
//! `getComputedStyle` and a real `opacity` property, legacy engines expose
//! `currentStyle` and model opacity as an alpha filter.

use std::fmt;

use domkit_dom::{NodeId, Result, Window};

use crate::style::StyleValue;

/// Engine-specific style behaviour, selected once from
/// [`Capabilities`](crate::Capabilities)
pub trait StyleEngine: fmt::Debug + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Script name of the `float` property
    fn float_property(&self) -> &'static str;

    /// Resolve an already camel-cased property for `element`
    fn read(&self, window: &Window, element: NodeId, property: &str) -> Result<Option<String>>;

    /// Apply an opacity write
    fn write_opacity(&self, window: &Window, element: NodeId, value: &StyleValue) -> Result<()>;
}

/// Standards engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernEngine;

impl StyleEngine for ModernEngine {
    fn name(&self) -> &'static str {
        "modern"
    }

    fn float_property(&self) -> &'static str {
        "cssFloat"
    }

    fn read(&self, window: &Window, element: NodeId, property: &str) -> Result<Option<String>> {
        let computed = window.get_computed_style(element)?;
        let inline = window.style_property(element, property)?;
        Ok(inline.or_else(|| computed.get(property).map(str::to_string)))
    }

    fn write_opacity(&self, window: &Window, element: NodeId, value: &StyleValue) -> Result<()> {
        window.set_style_property(element, "opacity", &value.to_string())
    }
}

/// Legacy engine (document mode below 9)
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyEngine;

impl LegacyEngine {
    /// Opacity the engine reports when no usable alpha filter is present
    pub const DEFAULT_OPACITY: f64 = 1.0;

    /// Filter string carrying `value` (0 to 1) as an alpha opacity
    pub fn alpha_filter(value: f64) -> String {
        format!("alpha(opacity={})", value * 100.0)
    }
}

impl StyleEngine for LegacyEngine {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn float_property(&self) -> &'static str {
        "styleFloat"
    }

    fn read(&self, window: &Window, element: NodeId, property: &str) -> Result<Option<String>> {
        if property == "opacity" {
            let opacity = window.alpha_opacity(element).map(|v| v / 100.0).unwrap_or_else(|err| {
                tracing::trace!(?element, %err, "no alpha filter, reporting full opacity");
                Self::DEFAULT_OPACITY
            });
            return Ok(Some(opacity.to_string()));
        }

        if let Some(inline) = window.style_property(element, property)? {
            return Ok(Some(inline));
        }
        let current = window.current_style(element)?;
        Ok(current.get(property).map(str::to_string))
    }

    fn write_opacity(&self, window: &Window, element: NodeId, value: &StyleValue) -> Result<()> {
        let filter = value.as_number().map(Self::alpha_filter).unwrap_or_default();
        window.set_style_property(element, "filter", &filter)
    }
}
