//! Style injection: wrapping registry entries with theme lookups.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, trace};

use super::registry::{Components, Renderable};
use crate::error::ConfigError;
use crate::render::{Component, Node, Props, RenderContext};
use crate::style::Style;
use crate::theme::resolve;

/// Component keys whose `align` attribute becomes a `textAlign` style.
///
/// Declarations use camelCase property names; the style engine emits
/// `textAlign` as the CSS `text-align` rule.
pub const ALIGNED_CELLS: &[&str] = &["th", "td"];

/// Builds a styled registry from a base registry.
///
/// Every entry is wrapped so that, on each render, it:
///
/// 1. resolves `styles.<key>` from the context's theme,
/// 2. takes the instance style out of `props.sx`,
/// 3. merges the instance style over the theme style (recursively),
/// 4. renders the original entry with the merged declaration as `sx`.
///
/// Table cells ([`ALIGNED_CELLS`]) additionally turn an `align` attribute
/// into `textAlign`, beneath both the theme and the instance style.
///
/// The output has exactly the keys of the input.
///
/// # Errors
///
/// Returns [`ConfigError::NotRenderable`] naming the first entry that cannot
/// be rendered. Nothing is wrapped in that case.
///
/// # Example
///
/// ```rust
/// use themed::{build_styled, Components, Content, Props, RenderContext, Style, Theme};
///
/// let styled = build_styled(&Components::defaults()).unwrap();
/// let theme = Theme::new().add_style("h1", Style::new().set("fontSize", 32));
///
/// let cx = RenderContext::new(Some(&theme), &styled);
/// let node = cx
///     .render(&Content::element("h1", Props::new(), vec!["Title".into()]))
///     .unwrap();
/// assert_eq!(node.style().unwrap().get("fontSize"), Some(&32.into()));
/// ```
pub fn build_styled(base: &Components) -> Result<Components, ConfigError> {
    for (key, renderable) in base.iter() {
        renderable.validate(key)?;
    }
    Ok(wrap_all(base))
}

/// Wraps every entry without validating. Callers must have validated `base`.
pub(crate) fn wrap_all(base: &Components) -> Components {
    debug!(components = base.len(), "building styled component registry");
    base.iter()
        .map(|(key, renderable)| {
            let styled = Styled {
                key: key.to_string(),
                aligned: ALIGNED_CELLS.contains(&key),
                inner: renderable.clone(),
            };
            (key, Renderable::component(styled))
        })
        .collect()
}

struct Styled {
    key: String,
    aligned: bool,
    inner: Renderable,
}

impl Component for Styled {
    fn render(&self, cx: &RenderContext<'_>, mut props: Props, children: Vec<Node>) -> Node {
        let theme_style = resolve(&self.key, cx.theme());
        let instance_style = props.sx.take();

        let mut merged = if self.aligned {
            alignment_style(&props)
        } else {
            Style::new()
        };
        merged.merge(&theme_style);
        if let Some(instance_style) = &instance_style {
            merged.merge(instance_style);
        }

        trace!(key = %self.key, properties = merged.len(), "resolved component style");
        props.sx = Some(merged);
        self.inner.render(cx, props, children)
    }
}

fn alignment_style(props: &Props) -> Style {
    match props.get("align") {
        Some(align) => Style::new().set("textAlign", align),
        None => Style::new(),
    }
}

/// Memoizes [`build_styled`] by input identity.
///
/// Holds the most recent input and output. Asking again with the same
/// `Arc` returns the same output `Arc`; a different input rebuilds and
/// replaces the slot.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use themed::{Components, StyledCache};
///
/// let cache = StyledCache::new();
/// let base = Arc::new(Components::defaults());
///
/// let first = cache.get_or_build(&base).unwrap();
/// let second = cache.get_or_build(&base).unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct StyledCache {
    slot: Mutex<Option<(Arc<Components>, Arc<Components>)>>,
}

impl StyledCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the styled registry for `base`, building it on first use.
    ///
    /// # Errors
    ///
    /// Propagates [`build_styled`] errors; a failed build leaves the previous
    /// slot in place.
    pub fn get_or_build(&self, base: &Arc<Components>) -> Result<Arc<Components>, ConfigError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some((input, output)) = slot.as_ref() {
            if Arc::ptr_eq(input, base) {
                trace!("reusing styled component registry");
                return Ok(Arc::clone(output));
            }
        }

        let styled = Arc::new(build_styled(base)?);
        *slot = Some((Arc::clone(base), Arc::clone(&styled)));
        Ok(styled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Content;
    use crate::theme::Theme;
    use serde_json::{json, Value};

    fn render(theme: Option<&Theme>, key: &str, props: Props) -> Node {
        let styled = build_styled(&Components::defaults()).unwrap();
        let cx = RenderContext::new(theme, &styled);
        cx.render(&Content::element(key, props, vec!["text".into()]))
            .unwrap()
    }

    #[test]
    fn test_key_set_is_preserved() {
        let base = Components::defaults().with("Beep", "p");
        let styled = build_styled(&base).unwrap();
        assert!(base.keys().eq(styled.keys()));
    }

    #[test]
    fn test_theme_style_is_applied() {
        let theme = Theme::new().add_style("h2", Style::new().set("color", "primary"));
        let node = render(Some(&theme), "h2", Props::new());
        assert_eq!(node.tag(), Some("h2"));
        assert_eq!(Value::from(node.style().unwrap().clone()), json!({ "color": "primary" }));
    }

    #[test]
    fn test_instance_style_wins() {
        let theme = Theme::new().add_style(
            "p",
            Style::new().set("color", "red").set("fontSize", 12),
        );
        let node = render(Some(&theme), "p", Props::new().sx(Style::new().set("color", "blue")));
        assert_eq!(
            Value::from(node.style().unwrap().clone()),
            json!({ "color": "blue", "fontSize": 12 })
        );
    }

    #[test]
    fn test_nested_instance_style_merges() {
        let theme = Theme::from_value(json!({
            "styles": { "a": { "color": "primary", ":hover": { "color": "secondary", "textDecoration": "underline" } } }
        }));
        let sx = Style::from_value(&json!({ ":hover": { "color": "accent" } })).unwrap();
        let node = render(Some(&theme), "a", Props::new().sx(sx));
        assert_eq!(
            node.style().unwrap().get(":hover"),
            Some(&json!({ "color": "accent", "textDecoration": "underline" }))
        );
    }

    #[test]
    fn test_without_theme_instance_style_passes_through() {
        let node = render(None, "div", Props::new().sx(Style::new().set("color", "primary")));
        assert_eq!(node.style().unwrap().get("color"), Some(&json!("primary")));
    }

    #[test]
    fn test_attributes_forwarded() {
        let node = render(None, "a", Props::new().attr("href", "/docs"));
        assert_eq!(node.attr("href"), Some("/docs"));
    }

    #[test]
    fn test_alias_keys_resolve_by_key_not_tag() {
        let theme = Theme::new()
            .add_style("inlineCode", Style::new().set("fontFamily", "monospace"))
            .add_style("code", Style::new().set("color", "red"));
        let node = render(Some(&theme), "inlineCode", Props::new());
        assert_eq!(node.tag(), Some("code"));
        assert_eq!(
            Value::from(node.style().unwrap().clone()),
            json!({ "fontFamily": "monospace" })
        );
    }

    #[test]
    fn test_cell_alignment() {
        for key in ["th", "td"] {
            for align in ["left", "center", "right"] {
                let node = render(None, key, Props::new().attr("align", align));
                assert_eq!(node.style().unwrap().get("textAlign"), Some(&json!(align)));
                assert_eq!(node.attr("align"), Some(align));
            }
        }
    }

    #[test]
    fn test_cell_without_align_has_no_text_align() {
        let node = render(None, "td", Props::new());
        assert!(!node.style().unwrap().contains("textAlign"));
    }

    #[test]
    fn test_alignment_has_lowest_precedence() {
        let theme = Theme::new().add_style("th", Style::new().set("textAlign", "center"));
        let node = render(Some(&theme), "th", Props::new().attr("align", "left"));
        assert_eq!(node.style().unwrap().get("textAlign"), Some(&json!("center")));

        let node = render(
            Some(&theme),
            "th",
            Props::new().attr("align", "left").sx(Style::new().set("textAlign", "right")),
        );
        assert_eq!(node.style().unwrap().get("textAlign"), Some(&json!("right")));
    }

    #[test]
    fn test_align_on_other_components_is_ignored() {
        let node = render(None, "p", Props::new().attr("align", "left"));
        assert!(!node.style().unwrap().contains("textAlign"));
    }

    #[test]
    fn test_invalid_entry_fails_fast() {
        let base = Components::defaults().with("footer", "");
        let err = build_styled(&base).unwrap_err();
        assert!(matches!(err, ConfigError::NotRenderable { ref key, .. } if key == "footer"));
    }

    #[test]
    fn test_cache_reuses_by_identity() {
        let cache = StyledCache::new();
        let base = Arc::new(Components::defaults());

        let first = cache.get_or_build(&base).unwrap();
        let again = cache.get_or_build(&Arc::clone(&base)).unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert!(!Arc::ptr_eq(&first, &base));

        // Equal contents, different identity: rebuilt
        let other = Arc::new(Components::defaults());
        let rebuilt = cache.get_or_build(&other).unwrap();
        assert!(!Arc::ptr_eq(&first, &rebuilt));
    }

    #[test]
    fn test_cache_keeps_slot_on_failure() {
        let cache = StyledCache::new();
        let good = Arc::new(Components::defaults());
        let first = cache.get_or_build(&good).unwrap();

        let bad = Arc::new(Components::new().with("p", "not a tag"));
        assert!(cache.get_or_build(&bad).is_err());

        let again = cache.get_or_build(&good).unwrap();
        assert!(Arc::ptr_eq(&first, &again));
    }
}
