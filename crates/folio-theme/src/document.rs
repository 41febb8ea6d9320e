//! Document root attributes consumed by stylesheets.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::mode::ThemeMode;

/// Attribute carrying the explicit theme on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// The attributes of the document's root element.
///
/// Stylesheets key off [`THEME_ATTRIBUTE`]: `[data-theme="dark"]` selects
/// the dark palette, and its absence leaves the choice to the
/// `prefers-color-scheme` media query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentRoot {
    attributes: BTreeMap<String, String>,
}

impl DocumentRoot {
    /// Creates a root element with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, returning the root for chaining.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterates attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the explicit theme marker, if one is set.
    pub fn theme_marker(&self) -> Option<&str> {
        self.attribute(THEME_ATTRIBUTE)
    }

    /// Sets or clears the theme marker for `mode`.
    pub fn mark_theme(&mut self, mode: ThemeMode) {
        match mode.marker() {
            Some(value) => self.set_attribute(THEME_ATTRIBUTE, value),
            None => {
                self.remove_attribute(THEME_ATTRIBUTE);
            }
        }
    }
}
