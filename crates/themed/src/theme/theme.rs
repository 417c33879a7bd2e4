//! Theme value tree with fail-open path lookup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ThemeError;
use crate::style::Style;

/// Name of the top-level theme section holding per-component styles.
pub const STYLES: &str = "styles";

/// An application-supplied theme.
///
/// Themes are loosely structured: any JSON-compatible tree is accepted and
/// nothing is validated. Lookups walk the tree and return `None` as soon as a
/// segment is missing or the value on the path is not a container, so a
/// malformed theme behaves like an absent one.
///
/// # Example
///
/// ```rust
/// use themed::{Style, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .set("colors", json!({ "primary": "blue" }))
///     .add_style("footer", Style::new().set("background", "skyblue"));
///
/// assert_eq!(theme.lookup("colors.primary"), Some(&json!("blue")));
/// assert!(theme.style("footer").is_some());
/// assert!(theme.style("header").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(Value);

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Wraps an arbitrary value as a theme.
    ///
    /// Non-object roots are accepted; every lookup on them yields `None`.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parses a theme from JSON text.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        Ok(Self(serde_json::from_str(source)?))
    }

    /// Parses a theme from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        Ok(Self(serde_yaml::from_str(source)?))
    }

    /// Loads a theme file, choosing the format from its extension.
    ///
    /// `.json` files are parsed as JSON, `.yaml` and `.yml` as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnsupportedFormat`] for any other extension, or
    /// the read/parse error for the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ThemeError> = match ext.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml") | Some("yml") => Self::from_yaml,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }

    /// Sets a top-level section, returning the updated theme for chaining.
    ///
    /// A non-object root is replaced by an empty object first.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.root_mut().insert(key.to_string(), value.into());
        self
    }

    /// Sets the style for a component key under [`STYLES`].
    ///
    /// Replaces a `styles` section that is not an object.
    pub fn add_style(mut self, key: &str, style: Style) -> Self {
        let styles = self
            .root_mut()
            .entry(STYLES)
            .or_insert_with(|| Value::Object(Map::new()));
        if !styles.is_object() {
            *styles = Value::Object(Map::new());
        }
        if let Value::Object(map) = styles {
            map.insert(key.to_string(), style.into());
        }
        self
    }

    /// Returns a top-level section.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }

    /// Walks a path of keys from the root.
    ///
    /// Array values are indexed by numeric segments.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.0, |current, segment| step(current, segment))
    }

    /// Walks a dot-separated path from the root, e.g. `"colors.primary"`.
    pub fn lookup(&self, dotted: &str) -> Option<&Value> {
        dotted
            .split('.')
            .try_fold(&self.0, |current, segment| step(current, segment))
    }

    /// Returns the declaration stored at `styles.<key>`, if it is an object.
    pub fn style(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get_path(&[STYLES, key])?.as_object()
    }

    /// Returns the underlying value tree.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn root_mut(&mut self) -> &mut Map<String, Value> {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        match &mut self.0 {
            Value::Object(map) => map,
            _ => unreachable!("root was just replaced by an object"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Theme {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
