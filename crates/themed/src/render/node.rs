//! Component props and rendered output nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::Style;

/// Raw element attributes, in insertion order.
pub type Attributes = IndexMap<String, String>;

/// Props passed to a component invocation.
///
/// `sx` is the styling prop. Authors attach an instance style through it; a
/// styled wrapper takes it out, merges it over the theme declaration and
/// hands the merged declaration to the wrapped component in its place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    /// Attributes forwarded to the rendered element.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: Attributes,
    /// The styling prop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sx: Option<Style>,
}

impl Props {
    /// Creates empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, returning the updated props for chaining.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Sets the styling prop, returning the updated props for chaining.
    pub fn sx(mut self, style: Style) -> Self {
        self.sx = Some(style);
        self
    }

    /// Returns an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Rendered output.
///
/// Element styles are declarations, not CSS text: turning them into rendered
/// output is the style engine's job (see [`compute`](crate::compute)).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A host element.
    Element {
        tag: String,
        #[serde(skip_serializing_if = "IndexMap::is_empty")]
        attrs: Attributes,
        #[serde(skip_serializing_if = "Style::is_empty")]
        style: Style,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
    /// Text content.
    Text { value: String },
    /// Several sibling nodes without a wrapping element.
    Fragment { children: Vec<Node> },
}

impl Node {
    /// Creates a host element from props, using `props.sx` as its style.
    pub fn element(tag: impl Into<String>, props: Props, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.into(),
            attrs: props.attrs,
            style: props.sx.unwrap_or_default(),
            children,
        }
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Returns the element tag, if this is an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Returns the element style, if this is an element.
    pub fn style(&self) -> Option<&Style> {
        match self {
            Node::Element { style, .. } => Some(style),
            _ => None,
        }
    }

    /// Returns an element attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Returns the child nodes. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } | Node::Fragment { children } => children.as_slice(),
            Node::Text { .. } => &[],
        }
    }

    /// Concatenates all text below this node.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { value } => value.clone(),
            _ => self.children().iter().map(Node::text_content).collect(),
        }
    }

    /// Finds the innermost element whose text content equals `text`.
    pub fn find_by_text(&self, text: &str) -> Option<&Node> {
        if let Some(found) = self.children().iter().find_map(|c| c.find_by_text(text)) {
            return Some(found);
        }
        match self {
            Node::Element { .. } if self.text_content() == text => Some(self),
            _ => None,
        }
    }

    /// Finds the first element with the given tag, depth first.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        if self.tag() == Some(tag) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_tag(tag))
    }
}
