//! Style access
//!
//! Single-property reads and writes that hide engine differences: property
//! name normalization, the `float` alias, legacy opacity filters and the
//! computed/current style split.

use std::fmt;
use std::rc::Rc;

use domkit_dom::{NodeId, Window};

use crate::engine::StyleEngine;
use crate::text::camel_case;

/// A value written to a style property
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Numeric reading of the value, as a script engine would coerce it
    ///
    /// Numeric strings count (surrounding whitespace ignored, blank is 0);
    /// NaN does not.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            StyleValue::Number(n) => *n,
            StyleValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse().ok()?
                }
            }
        };
        (!n.is_nan()).then_some(n)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n.into())
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

/// Reads and writes element style
#[derive(Debug, Clone)]
pub struct StyleAccessor {
    host: Option<Rc<Window>>,
    engine: &'static dyn StyleEngine,
}

impl StyleAccessor {
    pub fn new(host: Option<Rc<Window>>, engine: &'static dyn StyleEngine) -> Self {
        Self { host, engine }
    }

    pub fn engine(&self) -> &'static dyn StyleEngine {
        self.engine
    }

    /// Script name for a property: camel-cased, `float` mapped to the engine's alias
    pub fn normalize(&self, property: &str) -> String {
        let name = camel_case(property);
        if name == "float" {
            self.engine.float_property().to_string()
        } else {
            name
        }
    }

    /// Resolved value of `property` on `element`
    ///
    /// None for absent arguments or without a host. If the engine cannot
    /// resolve the value, the inline value is returned instead.
    pub fn get(&self, element: Option<NodeId>, property: &str) -> Option<String> {
        let window = self.host.as_deref()?;
        let element = element?;
        if property.is_empty() {
            return None;
        }

        let name = self.normalize(property);
        match self.engine.read(window, element, &name) {
            Ok(value) => value,
            Err(err) => {
                tracing::trace!(?element, property = %name, %err, "style resolution failed, using inline value");
                window.style_property(element, &name).ok().flatten()
            }
        }
    }

    /// Set one inline property
    pub fn set(&self, element: Option<NodeId>, property: &str, value: impl Into<StyleValue>) {
        let (Some(window), Some(element)) = (self.host.as_deref(), element) else {
            return;
        };
        if property.is_empty() {
            return;
        }

        let name = self.normalize(property);
        let value = value.into();
        let result = if name == "opacity" {
            self.engine.write_opacity(window, element, &value)
        } else {
            window.set_style_property(element, &name, &value.to_string())
        };
        if let Err(err) = result {
            tracing::trace!(?element, property = %name, %err, "style write declined");
        }
    }

    /// Set several properties; each entry is applied on its own
    pub fn set_all<K, V, I>(&self, element: Option<NodeId>, entries: I)
    where
        K: AsRef<str>,
        V: Into<StyleValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        if self.host.is_none() || element.is_none() {
            return;
        }
        for (property, value) in entries {
            self.set(element, property.as_ref(), value);
        }
    }
}
