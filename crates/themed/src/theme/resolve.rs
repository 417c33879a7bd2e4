//! Style lookup by component key.

use serde_json::Value;
use tracing::{debug, trace};

use super::theme::{Theme, STYLES};
use crate::style::Style;
use crate::util::value_kind;

/// Resolves the theme declaration for a component key.
///
/// Returns `theme.styles[key]` when it is an object. A missing theme, a
/// missing `styles` section, a missing key, or a value of the wrong shape all
/// resolve to an empty [`Style`]; absence is never an error.
///
/// # Example
///
/// ```rust
/// use themed::{resolve, Theme};
/// use serde_json::json;
///
/// let theme = Theme::from_value(json!({
///     "styles": { "footer": { "background": "skyblue" } }
/// }));
///
/// let style = resolve("footer", Some(&theme));
/// assert_eq!(serde_json::to_value(&style).unwrap(), json!({ "background": "skyblue" }));
///
/// assert!(resolve("header", Some(&theme)).is_empty());
/// assert!(resolve("footer", None).is_empty());
/// ```
pub fn resolve(key: &str, theme: Option<&Theme>) -> Style {
    let Some(theme) = theme else {
        trace!(key, "no theme installed");
        return Style::new();
    };

    match theme.get_path(&[STYLES, key]) {
        Some(Value::Object(map)) => Style::from(map.clone()),
        Some(other) => {
            debug!(key, found = value_kind(other), "ignoring theme style that is not a mapping");
            Style::new()
        }
        None => Style::new(),
    }
}

/// Returns a resolver bound to a component key.
///
/// Useful for styling elements that are not part of the component registry
/// directly from the theme.
///
/// # Example
///
/// ```rust
/// use themed::{themed, Style, Theme};
///
/// let footer = themed("footer");
/// let theme = Theme::new().add_style("footer", Style::new().set("background", "skyblue"));
///
/// assert_eq!(footer(Some(&theme)), Style::new().set("background", "skyblue"));
/// ```
pub fn themed(key: impl Into<String>) -> impl Fn(Option<&Theme>) -> Style {
    let key = key.into();
    move |theme: Option<&Theme>| resolve(&key, theme)
}
