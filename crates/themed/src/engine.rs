//! Theme token computation.
//!
//! Merged declarations carry theme tokens verbatim (`color: "primary"`,
//! `p: 2`). [`compute`] is a small reference engine that turns them into
//! literal values the way a CSS-in-object style engine would:
//!
//! - shorthand properties expand (`bg` → `backgroundColor`, `mx` →
//!   `marginLeft` + `marginRight`),
//! - values of scaled properties are looked up in the matching theme scale
//!   (`color` in `colors`, `fontSize` in `fontSizes`, margins in `space`),
//! - `variant: "<path>"` pulls in the declaration at that theme path,
//! - nested declarations are computed recursively.
//!
//! Tokens that do not resolve pass through unchanged. A `variant` that leads
//! back to one already being expanded is ignored.

use serde_json::{Map, Value};
use tracing::debug;

use crate::style::Style;
use crate::theme::{ColorMode, Theme};

const VARIANT: &str = "variant";

/// Computes literal style values for a declaration under a theme.
///
/// # Example
///
/// ```rust
/// use themed::{compute, Style, Theme};
/// use serde_json::json;
///
/// let theme = Theme::from_value(json!({ "colors": { "primary": "blue" }, "space": [0, 4, 8] }));
/// let computed = compute(&Style::new().set("color", "primary").set("px", 2), &theme);
///
/// assert_eq!(computed.get("color"), Some(&json!("blue")));
/// assert_eq!(computed.get("paddingLeft"), Some(&json!(8)));
/// assert_eq!(computed.get("paddingRight"), Some(&json!(8)));
/// ```
pub fn compute(style: &Style, theme: &Theme) -> Style {
    TokenEngine::new(theme).compute(style)
}

/// Token engine bound to a theme and an optional color mode.
#[derive(Debug, Clone, Copy)]
pub struct TokenEngine<'a> {
    theme: &'a Theme,
    mode: Option<ColorMode>,
}

impl<'a> TokenEngine<'a> {
    /// Creates an engine using the base `colors` scale.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme, mode: None }
    }

    /// Prefers colors from `colors.modes.<mode>` over the base scale.
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Computes a declaration.
    pub fn compute(&self, style: &Style) -> Style {
        Style::from(self.compute_map(style.as_map(), &mut Vec::new()))
    }

    /// `variants` holds the variant paths being expanded on the current
    /// branch; a path already on it is skipped.
    fn compute_map(
        &self,
        input: &Map<String, Value>,
        variants: &mut Vec<String>,
    ) -> Map<String, Value> {
        let mut out = Map::new();

        if let Some(Value::String(path)) = input.get(VARIANT) {
            if variants.contains(path) {
                debug!(variant = %path, "skipping recursive variant");
            } else if let Some(Value::Object(variant)) = self.theme.lookup(path) {
                variants.push(path.clone());
                out = self.compute_map(variant, variants);
                variants.pop();
            }
        }

        for (property, value) in input {
            if property == VARIANT {
                continue;
            }
            if let Value::Object(nested) = value {
                let computed = Value::Object(self.compute_map(nested, variants));
                out.insert(property.clone(), computed);
                continue;
            }
            match expand(property) {
                Some(targets) => {
                    for &target in targets {
                        out.insert(target.to_string(), self.token(target, value));
                    }
                }
                None => {
                    out.insert(property.clone(), self.token(property, value));
                }
            }
        }

        out
    }

    fn token(&self, property: &str, value: &Value) -> Value {
        let Some(scale) = scale_for(property) else {
            return value.clone();
        };
        match value {
            Value::Array(items) => {
                Value::Array(items.iter().map(|v| self.token(property, v)).collect())
            }
            Value::String(key) => self.lookup(scale, key).unwrap_or_else(|| value.clone()),
            Value::Number(n) => self
                .lookup(scale, &n.to_string())
                .unwrap_or_else(|| value.clone()),
            _ => value.clone(),
        }
    }

    fn lookup(&self, scale: &str, key: &str) -> Option<Value> {
        if scale == "colors" {
            if let Some(mode) = self.mode {
                let path = format!("colors.modes.{}.{}", mode.as_str(), key);
                if let Some(found) = self.theme.lookup(&path).filter(|v| !v.is_object()) {
                    return Some(found.clone());
                }
            }
        }
        self.theme
            .lookup(&format!("{}.{}", scale, key))
            .filter(|v| !v.is_object())
            .cloned()
    }
}

fn expand(property: &str) -> Option<&'static [&'static str]> {
    let targets: &'static [&'static str] = match property {
        "bg" => &["backgroundColor"],
        "m" => &["margin"],
        "mt" => &["marginTop"],
        "mr" => &["marginRight"],
        "mb" => &["marginBottom"],
        "ml" => &["marginLeft"],
        "mx" | "marginX" => &["marginLeft", "marginRight"],
        "my" | "marginY" => &["marginTop", "marginBottom"],
        "p" => &["padding"],
        "pt" => &["paddingTop"],
        "pr" => &["paddingRight"],
        "pb" => &["paddingBottom"],
        "pl" => &["paddingLeft"],
        "px" | "paddingX" => &["paddingLeft", "paddingRight"],
        "py" | "paddingY" => &["paddingTop", "paddingBottom"],
        _ => return None,
    };
    Some(targets)
}

fn scale_for(property: &str) -> Option<&'static str> {
    let scale = match property {
        "color" | "backgroundColor" | "borderColor" | "outlineColor" | "fill" | "stroke"
        | "caretColor" | "textDecorationColor" | "columnRuleColor" => "colors",
        "fontFamily" => "fonts",
        "fontSize" => "fontSizes",
        "fontWeight" => "fontWeights",
        "lineHeight" => "lineHeights",
        "letterSpacing" => "letterSpacings",
        "margin" | "marginTop" | "marginRight" | "marginBottom" | "marginLeft" | "padding"
        | "paddingTop" | "paddingRight" | "paddingBottom" | "paddingLeft" | "gap" | "rowGap"
        | "columnGap" | "top" | "right" | "bottom" | "left" => "space",
        "width" | "height" | "minWidth" | "maxWidth" | "minHeight" | "maxHeight" | "size" => {
            "sizes"
        }
        "borderRadius" => "radii",
        "borderWidth" => "borderWidths",
        "boxShadow" | "textShadow" => "shadows",
        "zIndex" => "zIndices",
        _ => return None,
    };
    Some(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme() -> Theme {
        Theme::from_value(json!({
            "colors": {
                "text": "#111",
                "primary": "blue",
                "gray": { "light": "#eee", "dark": "#333" },
                "modes": { "dark": { "text": "#fff" } }
            },
            "space": [0, 4, 8, 16],
            "fontSizes": [12, 14, 16, 20],
            "fonts": { "mono": "Menlo, monospace" },
            "text": { "heading": { "fontFamily": "mono", "fontWeight": "bold" } }
        }))
    }

    fn style(value: Value) -> Style {
        Style::from_value(&value).unwrap()
    }

    #[test]
    fn test_color_token_resolves() {
        let computed = compute(&Style::new().set("color", "primary"), &theme());
        assert_eq!(computed.get("color"), Some(&json!("blue")));
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let computed = compute(&style(json!({ "color": "tomato", "fontSize": 99 })), &theme());
        assert_eq!(Value::from(computed), json!({ "color": "tomato", "fontSize": 99 }));
    }

    #[test]
    fn test_dotted_color_token() {
        let computed = compute(&Style::new().set("bg", "gray.dark"), &theme());
        assert_eq!(Value::from(computed), json!({ "backgroundColor": "#333" }));
    }

    #[test]
    fn test_object_token_does_not_resolve() {
        let computed = compute(&Style::new().set("color", "gray"), &theme());
        assert_eq!(computed.get("color"), Some(&json!("gray")));
    }

    #[test]
    fn test_space_shorthands_expand() {
        let computed = compute(&style(json!({ "mx": 2, "pt": 1 })), &theme());
        assert_eq!(
            Value::from(computed),
            json!({ "marginLeft": 8, "marginRight": 8, "paddingTop": 4 })
        );
    }

    #[test]
    fn test_responsive_arrays_map_each_value() {
        let computed = compute(&Style::new().set("fontSize", json!([1, 3])), &theme());
        assert_eq!(computed.get("fontSize"), Some(&json!([14, 20])));
    }

    #[test]
    fn test_nested_declarations_compute() {
        let computed = compute(&style(json!({ ":hover": { "color": "primary" } })), &theme());
        assert_eq!(computed.get(":hover"), Some(&json!({ "color": "blue" })));
    }

    #[test]
    fn test_variant_expands_under_explicit_properties() {
        let computed = compute(
            &style(json!({ "variant": "text.heading", "fontWeight": 400 })),
            &theme(),
        );
        assert_eq!(
            Value::from(computed),
            json!({ "fontFamily": "Menlo, monospace", "fontWeight": 400 })
        );
    }

    #[test]
    fn test_missing_variant_is_ignored() {
        let computed = compute(&style(json!({ "variant": "text.nope", "m": 0 })), &theme());
        assert_eq!(Value::from(computed), json!({ "margin": 0 }));
    }

    #[test]
    fn test_self_referencing_variant_terminates() {
        let theme = Theme::from_value(json!({
            "text": { "a": { "variant": "text.a", "color": "red" } }
        }));
        let computed = compute(&Style::new().set("variant", "text.a"), &theme);
        assert_eq!(Value::from(computed), json!({ "color": "red" }));
    }

    #[test]
    fn test_mutually_recursive_variants_terminate() {
        let theme = Theme::from_value(json!({
            "text": {
                "a": { "variant": "text.b", "fontWeight": "bold" },
                "b": { "variant": "text.a", "color": "red" }
            }
        }));
        let computed = compute(&Style::new().set("variant", "text.a"), &theme);
        assert_eq!(
            Value::from(computed),
            json!({ "color": "red", "fontWeight": "bold" })
        );
    }

    #[test]
    fn test_same_variant_in_sibling_blocks_expands_twice() {
        let theme = theme();
        let computed = compute(
            &style(json!({
                "variant": "text.heading",
                ":hover": { "variant": "text.heading" }
            })),
            &theme,
        );
        assert_eq!(computed.get("fontFamily"), Some(&json!("Menlo, monospace")));
        assert_eq!(
            computed.get(":hover"),
            Some(&json!({ "fontFamily": "Menlo, monospace", "fontWeight": "bold" }))
        );
    }

    #[test]
    fn test_color_mode_prefers_mode_scale() {
        let theme = theme();
        let engine = TokenEngine::new(&theme).with_mode(ColorMode::Dark);
        let computed = engine.compute(&style(json!({ "color": "text", "bg": "primary" })));
        assert_eq!(
            Value::from(computed),
            json!({ "color": "#fff", "backgroundColor": "blue" })
        );

        let light = TokenEngine::new(&theme).with_mode(ColorMode::Light);
        assert_eq!(
            light.compute(&Style::new().set("color", "text")).get("color"),
            Some(&json!("#111"))
        );
    }

    #[test]
    fn test_unscaled_properties_untouched() {
        let computed = compute(&Style::new().set("textAlign", "left"), &theme());
        assert_eq!(computed.get("textAlign"), Some(&json!("left")));
    }
}
