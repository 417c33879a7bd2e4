//! Evaluated document content.

use serde::{Deserialize, Serialize};

use super::node::Props;

/// A tree of component invocations produced by the document evaluator.
///
/// Deserializes from JSON: strings are text, arrays are fragments and
/// objects are component invocations keyed by `type`.
///
/// ```json
/// [
///   { "type": "h1", "children": ["The Heading"] },
///   { "type": "Beep" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Literal text.
    Text(String),
    /// Sibling content without a wrapping component.
    Fragment(Vec<Content>),
    /// An invocation of the component registered under `key`.
    Element {
        #[serde(rename = "type")]
        key: String,
        #[serde(default)]
        props: Props,
        #[serde(default)]
        children: Vec<Content>,
    },
}

impl Content {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Content::Text(value.into())
    }

    /// Creates a component invocation.
    pub fn element(key: impl Into<String>, props: Props, children: Vec<Content>) -> Self {
        Content::Element {
            key: key.into(),
            props,
            children,
        }
    }

    /// Parses content from JSON text.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::text(value)
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn test_parse_document() {
        let content = Content::from_json(
            r#"[
                { "type": "h1", "children": ["The Heading"] },
                { "type": "td", "props": { "attrs": { "align": "left" }, "sx": { "color": "red" } } },
                { "type": "Beep" }
            ]"#,
        )
        .unwrap();

        let Content::Fragment(items) = content else {
            panic!("expected fragment");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0],
            Content::element("h1", Props::new(), vec!["The Heading".into()])
        );
        assert_eq!(
            items[1],
            Content::element(
                "td",
                Props::new().attr("align", "left").sx(Style::new().set("color", "red")),
                vec![]
            )
        );
        assert_eq!(items[2], Content::element("Beep", Props::new(), vec![]));
    }

    #[test]
    fn test_parse_rejects_numbers() {
        assert!(Content::from_json("42").is_err());
    }
}
