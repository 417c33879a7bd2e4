//! The default document-structure component table.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::registry::Components;
use super::styled::wrap_all;

/// Default component keys and the host element each renders, in order.
///
/// Keys match the node names a markdown evaluator produces. Most render the
/// element of the same name; `inlineCode`, `thematicBreak` and `root` map to
/// `code`, `hr` and `div`.
pub const DEFAULT_COMPONENTS: &[(&str, &str)] = &[
    ("p", "p"),
    ("b", "b"),
    ("i", "i"),
    ("a", "a"),
    ("h1", "h1"),
    ("h2", "h2"),
    ("h3", "h3"),
    ("h4", "h4"),
    ("h5", "h5"),
    ("h6", "h6"),
    ("img", "img"),
    ("pre", "pre"),
    ("code", "code"),
    ("ol", "ol"),
    ("ul", "ul"),
    ("li", "li"),
    ("blockquote", "blockquote"),
    ("hr", "hr"),
    ("em", "em"),
    ("table", "table"),
    ("tr", "tr"),
    ("th", "th"),
    ("td", "td"),
    ("strong", "strong"),
    ("del", "del"),
    ("inlineCode", "code"),
    ("thematicBreak", "hr"),
    ("div", "div"),
    ("root", "div"),
];

static STYLED_DEFAULTS: Lazy<Arc<Components>> =
    Lazy::new(|| Arc::new(wrap_all(&Components::defaults())));

impl Components {
    /// Returns the default table as unstyled host elements.
    pub fn defaults() -> Self {
        DEFAULT_COMPONENTS.iter().copied().collect()
    }
}

/// Returns the shared, styled default table.
///
/// Every entry resolves `styles.<key>` from the render context's theme, so
/// `styled_defaults().get("div")` is a themed `div` ready to render.
pub fn styled_defaults() -> Arc<Components> {
    Arc::clone(&STYLED_DEFAULTS)
}
