//! The [`Style`] declaration type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::merge::deep_merge;

/// A style declaration: style property names mapped to values.
///
/// Values are strings, numbers, arrays (responsive values) or nested
/// declarations (pseudo-states, media queries). Property order is preserved.
///
/// Color and spacing values may be theme tokens such as `"primary"`; they are
/// stored verbatim and only turned into literal values by
/// [`compute`](crate::compute).
///
/// # Example
///
/// ```rust
/// use themed::Style;
///
/// let theme_style = Style::new().set("color", "red").set("fontSize", 12);
/// let instance = Style::new().set("color", "blue");
///
/// let merged = theme_style.merged(&instance);
/// assert_eq!(merged.get("color"), Some(&"blue".into()));
/// assert_eq!(merged.get("fontSize"), Some(&12.into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(Map<String, Value>);

impl Style {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Sets a property, returning the updated declaration for chaining.
    pub fn set(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.0.insert(property.to_string(), value.into());
        self
    }

    /// Sets a property in place, returning the previous value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(property.into(), value.into())
    }

    /// Removes a property, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<Value> {
        self.0.shift_remove(property)
    }

    /// Returns the value of a property.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.get(property)
    }

    /// Returns true if the property is declared.
    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Returns the number of top-level properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `over` into this declaration.
    ///
    /// Properties in `over` win. Where both sides hold a nested declaration
    /// the two are merged key by key instead of replaced.
    pub fn merge(&mut self, over: &Style) {
        deep_merge(&mut self.0, &over.0);
    }

    /// Returns this declaration with `over` merged on top.
    pub fn merged(mut self, over: &Style) -> Style {
        self.merge(over);
        self
    }

    /// Builds a declaration from a JSON value.
    ///
    /// Returns `None` unless the value is an object.
    pub fn from_value(value: &Value) -> Option<Style> {
        value.as_object().map(|map| Style(map.clone()))
    }

    /// Returns the underlying property map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the declaration, returning the underlying property map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Style {
    fn from(map: Map<String, Value>) -> Self {
        Style(map)
    }
}

impl From<Style> for Value {
    fn from(style: Style) -> Self {
        Value::Object(style.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Style(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
