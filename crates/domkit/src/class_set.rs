//! Class tokens
//!
//! `has` / `add` / `remove` on an element's classes, through the native token
//! list when the host has one and through the raw `class` attribute otherwise.

use std::rc::Rc;

use domkit_dom::{NodeId, Window};

use crate::text::trim;
use crate::{DomKitError, Result};

/// Class mutation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassModel {
    /// `element.classList`
    TokenList,
    /// `element.className` + `setAttribute("class")`
    Attribute,
}

/// Padded-substring membership test on a raw class attribute
fn padded_contains(class_name: &str, token: &str) -> bool {
    format!(" {class_name} ").contains(&format!(" {token} "))
}

/// Reads and mutates element classes
#[derive(Debug, Clone)]
pub struct ClassSet {
    host: Option<Rc<Window>>,
    model: ClassModel,
}

impl ClassSet {
    pub fn new(host: Option<Rc<Window>>, model: ClassModel) -> Self {
        Self { host, model }
    }

    pub fn model(&self) -> ClassModel {
        self.model
    }

    /// Whether `element` carries `token`
    ///
    /// Absent element or empty token is `Ok(false)`. A token containing
    /// whitespace is rejected: query one class at a time.
    pub fn has(&self, element: Option<NodeId>, token: &str) -> Result<bool> {
        let Some(element) = element else {
            return Ok(false);
        };
        if token.is_empty() {
            return Ok(false);
        }
        if token.contains(char::is_whitespace) {
            return Err(DomKitError::WhitespaceInClassToken(token.to_string()));
        }
        let Some(window) = self.host.as_deref() else {
            return Ok(false);
        };

        let present = match self.model {
            ClassModel::TokenList => window.class_list_contains(element, token),
            ClassModel::Attribute => window.class_name(element).map(|name| padded_contains(&name, token)),
        };
        Ok(present.unwrap_or_else(|err| {
            tracing::trace!(?element, token, %err, "class lookup declined");
            false
        }))
    }

    /// Add each whitespace-separated token of `tokens` that is not present
    pub fn add(&self, element: Option<NodeId>, tokens: &str) {
        let (Some(window), Some(element)) = (self.host.as_deref(), element) else {
            return;
        };

        let result = match self.model {
            ClassModel::TokenList => tokens
                .split_whitespace()
                .try_for_each(|token| window.class_list_add(element, token).map(drop)),
            ClassModel::Attribute => window.class_name(element).and_then(|mut current| {
                for token in tokens.split_whitespace() {
                    if !padded_contains(&current, token) {
                        current.push(' ');
                        current.push_str(token);
                    }
                }
                window.set_class_name(element, trim(&current))
            }),
        };
        if let Err(err) = result {
            tracing::trace!(?element, tokens, %err, "class add declined");
        }
    }

    /// Remove every whitespace-separated token of `tokens`
    pub fn remove(&self, element: Option<NodeId>, tokens: &str) {
        let (Some(window), Some(element)) = (self.host.as_deref(), element) else {
            return;
        };
        if tokens.is_empty() {
            return;
        }

        let result = match self.model {
            ClassModel::TokenList => tokens
                .split_whitespace()
                .try_for_each(|token| window.class_list_remove(element, token).map(drop)),
            ClassModel::Attribute => window.class_name(element).and_then(|current| {
                let mut padded = format!(" {current} ");
                for token in tokens.split_whitespace() {
                    let needle = format!(" {token} ");
                    while padded.contains(&needle) {
                        padded = padded.replacen(&needle, " ", 1);
                    }
                }
                window.set_class_name(element, trim(&padded))
            }),
        };
        if let Err(err) = result {
            tracing::trace!(?element, tokens, %err, "class remove declined");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domkit_dom::HostFeatures;

    fn setup(model: ClassModel) -> (Rc<Window>, ClassSet, NodeId) {
        let features = match model {
            ClassModel::TokenList => HostFeatures::modern(),
            ClassModel::Attribute => HostFeatures::legacy(8),
        };
        let window = Rc::new(Window::new(features));
        let div = window.append_element(window.body(), "div");
        (Rc::clone(&window), ClassSet::new(Some(window), model), div)
    }

    const MODELS: [ClassModel; 2] = [ClassModel::TokenList, ClassModel::Attribute];

    #[test]
    fn test_add_has_remove_roundtrip() {
        for model in MODELS {
            let (_, classes, div) = setup(model);
            classes.add(Some(div), "foo");
            assert!(classes.has(Some(div), "foo").unwrap(), "{model:?}");

            classes.remove(Some(div), "foo");
            assert!(!classes.has(Some(div), "foo").unwrap(), "{model:?}");
        }
    }

    #[test]
    fn test_repeated_add_is_idempotent() {
        for model in MODELS {
            let (window, classes, div) = setup(model);
            classes.add(Some(div), "foo");
            classes.add(Some(div), "foo");
            classes.add(Some(div), "foo foo");

            let name = window.class_name(div).unwrap();
            assert_eq!(name.split_whitespace().filter(|t| *t == "foo").count(), 1, "{model:?}");
        }
    }

    #[test]
    fn test_whitespace_token_is_error() {
        for model in MODELS {
            let (_, classes, div) = setup(model);
            assert_eq!(
                classes.has(Some(div), "a b"),
                Err(DomKitError::WhitespaceInClassToken("a b".into()))
            );
            assert!(classes.has(Some(div), "a\tb").is_err());
        }
        let detached = ClassSet::new(None, ClassModel::Attribute);
        assert!(detached.has(Some(NodeId::ROOT), "a b").is_err());
    }

    #[test]
    fn test_absent_arguments() {
        let (window, classes, div) = setup(ClassModel::Attribute);
        assert_eq!(classes.has(None, "foo"), Ok(false));
        assert_eq!(classes.has(Some(div), ""), Ok(false));
        assert_eq!(classes.has(None, "a b"), Ok(false));

        classes.add(None, "foo");
        classes.remove(Some(div), "");
        assert_eq!(window.class_name(div).unwrap(), "");
    }

    #[test]
    fn test_attribute_path_keeps_attribute_tidy() {
        let (window, classes, div) = setup(ClassModel::Attribute);
        window.set_class_name(div, "a b").unwrap();

        for _ in 0..3 {
            classes.add(Some(div), "  c   d ");
            classes.remove(Some(div), "c d");
        }
        assert_eq!(window.class_name(div).unwrap(), "a b");

        classes.remove(Some(div), "a");
        assert_eq!(window.class_name(div).unwrap(), "b");
        classes.add(Some(div), "x");
        assert_eq!(window.class_name(div).unwrap(), "b x");
    }

    #[test]
    fn test_attribute_remove_drops_duplicates() {
        let (window, classes, div) = setup(ClassModel::Attribute);
        window.set_class_name(div, "x y x y x").unwrap();
        classes.remove(Some(div), "x");
        assert_eq!(window.class_name(div).unwrap(), "y y");
    }

    #[test]
    fn test_padded_match_is_whole_token() {
        let (window, classes, div) = setup(ClassModel::Attribute);
        window.set_class_name(div, "button-primary").unwrap();
        assert!(!classes.has(Some(div), "button").unwrap());
        assert!(classes.has(Some(div), "button-primary").unwrap());
    }

    #[test]
    fn test_non_element_is_quietly_false() {
        let (window, classes, _) = setup(ClassModel::TokenList);
        let text = window.dom_mut().create_text("hello");
        classes.add(Some(text), "foo");
        assert_eq!(classes.has(Some(text), "foo"), Ok(false));
    }
}
