//! Style declarations
//!
//! Inline `style` maps and resolved style snapshots. Property names are the
//! camel-cased script names (`backgroundColor`, `overflowY`, `cssFloat`).

use std::collections::HashMap;

/// Ordered property map, as exposed by `element.style`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssStyleDeclaration {
    props: Vec<(String, String)>,
}

impl CssStyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Property value, if set
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property; an empty value removes it
    pub fn set(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.remove(name);
            return;
        }
        match self.props.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.props.push((name.to_string(), value.to_string())),
        }
    }

    /// Remove a property; returns the old value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.props.iter().position(|(k, _)| k == name)?;
        Some(self.props.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Resolved style snapshot (getComputedStyle / currentStyle)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    values: HashMap<String, String>,
}

impl ComputedStyle {
    /// Cascade inline declarations over sheet declarations
    pub fn resolve(sheet: &CssStyleDeclaration, inline: &CssStyleDeclaration) -> Self {
        let mut values: HashMap<String, String> = HashMap::new();
        for (name, value) in sheet.iter().chain(inline.iter()) {
            values.insert(name.to_string(), value.to_string());
            if name == "overflow" {
                // Longhands follow the shorthand declared after them
                let mut parts = value.split_whitespace();
                let x = parts.next().unwrap_or("visible").to_string();
                let y = parts.next().map_or_else(|| x.clone(), str::to_string);
                values.insert("overflowX".into(), x);
                values.insert("overflowY".into(), y);
            }
        }

        let x = values.get("overflowX").map(String::as_str).unwrap_or("visible");
        let y = values.get("overflowY").map(String::as_str).unwrap_or("visible");
        let overflow = if x == y { x.to_string() } else { format!("{x} {y}") };
        values.insert("overflow".into(), overflow);

        Self { values }
    }

    /// Resolved value, falling back to the property's initial value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .or_else(|| initial_value(name))
    }
}

fn initial_value(name: &str) -> Option<&'static str> {
    Some(match name {
        "overflow" | "overflowX" | "overflowY" => "visible",
        "opacity" => "1",
        "display" => "inline",
        "position" => "static",
        "visibility" => "visible",
        "cssFloat" | "styleFloat" => "none",
        "filter" => "none",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_set_get_remove() {
        let mut style = CssStyleDeclaration::new();
        style.set("color", "red");
        style.set("display", "none");
        style.set("color", "blue");

        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.len(), 2);

        style.set("color", "");
        assert_eq!(style.get("color"), None);
        assert_eq!(style.remove("display").as_deref(), Some("none"));
        assert!(style.is_empty());
    }

    #[test]
    fn test_inline_wins_over_sheet() {
        let mut sheet = CssStyleDeclaration::new();
        sheet.set("color", "red");
        let mut inline = CssStyleDeclaration::new();
        inline.set("color", "green");

        let computed = ComputedStyle::resolve(&sheet, &inline);
        assert_eq!(computed.get("color"), Some("green"));
    }

    #[test]
    fn test_overflow_shorthand_expansion() {
        let mut sheet = CssStyleDeclaration::new();
        sheet.set("overflow", "hidden auto");
        let computed = ComputedStyle::resolve(&sheet, &CssStyleDeclaration::new());

        assert_eq!(computed.get("overflowX"), Some("hidden"));
        assert_eq!(computed.get("overflowY"), Some("auto"));
        assert_eq!(computed.get("overflow"), Some("hidden auto"));
    }

    #[test]
    fn test_overflow_longhand_only() {
        let mut sheet = CssStyleDeclaration::new();
        sheet.set("overflowY", "scroll");
        let computed = ComputedStyle::resolve(&sheet, &CssStyleDeclaration::new());

        assert_eq!(computed.get("overflowX"), Some("visible"));
        assert_eq!(computed.get("overflow"), Some("visible scroll"));
    }

    #[test]
    fn test_initial_values() {
        let computed = ComputedStyle::default();
        assert_eq!(computed.get("overflow"), Some("visible"));
        assert_eq!(computed.get("opacity"), Some("1"));
        assert_eq!(computed.get("color"), None);
    }
}
