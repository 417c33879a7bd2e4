//! The component registry type.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ConfigError;
use crate::render::{Component, Node, Props, RenderContext};
use crate::util::{is_element_name, value_kind};

/// A registry value: something that can render a component key.
#[derive(Clone)]
pub enum Renderable {
    /// An application-supplied component.
    Component(Arc<dyn Component>),
    /// A host element rendered with the given tag name.
    Tag(String),
}

impl Renderable {
    /// Wraps a component implementation.
    pub fn component(component: impl Component + 'static) -> Self {
        Renderable::Component(Arc::new(component))
    }

    /// Names a host element.
    pub fn tag(name: impl Into<String>) -> Self {
        Renderable::Tag(name.into())
    }

    /// Checks that this value can be rendered under `key`.
    ///
    /// Components always can; tags must be valid element names.
    pub fn validate(&self, key: &str) -> Result<(), ConfigError> {
        match self {
            Renderable::Component(_) => Ok(()),
            Renderable::Tag(name) if is_element_name(name) => Ok(()),
            Renderable::Tag(name) => Err(ConfigError::NotRenderable {
                key: key.to_string(),
                reason: if name.is_empty() {
                    "empty element name".to_string()
                } else {
                    format!("'{}' is not a valid element name", name)
                },
            }),
        }
    }

    /// Renders this value.
    pub fn render(&self, cx: &RenderContext<'_>, props: Props, children: Vec<Node>) -> Node {
        match self {
            Renderable::Component(component) => component.render(cx, props, children),
            Renderable::Tag(name) => Node::element(name.as_str(), props, children),
        }
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderable::Component(_) => f.write_str("Component(..)"),
            Renderable::Tag(name) => f.debug_tuple("Tag").field(name).finish(),
        }
    }
}

impl From<&str> for Renderable {
    fn from(name: &str) -> Self {
        Renderable::tag(name)
    }
}

impl From<String> for Renderable {
    fn from(name: String) -> Self {
        Renderable::Tag(name)
    }
}

impl From<Arc<dyn Component>> for Renderable {
    fn from(component: Arc<dyn Component>) -> Self {
        Renderable::Component(component)
    }
}

/// A mapping from component key to [`Renderable`].
///
/// Keys keep their insertion order.
///
/// # Example
///
/// ```rust
/// use themed::{Components, Node, Props, RenderContext, Renderable};
///
/// let components = Components::defaults()
///     .with("h1", "h2")
///     .with(
///         "Beep",
///         Renderable::component(|_cx: &RenderContext<'_>, props: Props, children: Vec<Node>| {
///             Node::element("p", props, children)
///         }),
///     );
///
/// assert!(components.contains("Beep"));
/// assert_eq!(components.keys().next(), Some("p"));
/// ```
#[derive(Clone, Default)]
pub struct Components {
    entries: IndexMap<String, Renderable>,
}

impl Components {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry, returning the updated registry for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Renderable>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces an entry.
    ///
    /// Replacing keeps the key at its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Renderable>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the entry for a key.
    pub fn get(&self, key: &str) -> Option<&Renderable> {
        self.entries.get(key)
    }

    /// Returns true if the key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Renderable)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a registry with `other`'s entries layered over this one.
    ///
    /// Entries from `other` win; keys new to this registry are appended.
    pub fn merge(&self, other: &Components) -> Components {
        let mut merged = self.clone();
        for (key, value) in &other.entries {
            merged.entries.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Loads a registry of host elements from data.
    ///
    /// The value must be a mapping of component key to element name, for
    /// example `{"h1": "h2", "note": "aside"}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAMapping`] if the value is not an object, and
    /// [`ConfigError::NotRenderable`] naming the first key whose value is not
    /// a valid element name.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let map = value.as_object().ok_or(ConfigError::NotAMapping {
            found: value_kind(value),
        })?;

        let mut components = Components::new();
        for (key, entry) in map {
            let renderable = match entry {
                Value::String(name) => Renderable::tag(name.as_str()),
                other => {
                    return Err(ConfigError::NotRenderable {
                        key: key.clone(),
                        reason: format!("expected an element name, found {}", value_kind(other)),
                    })
                }
            };
            renderable.validate(key)?;
            components.entries.insert(key.clone(), renderable);
        }
        Ok(components)
    }
}

impl fmt::Debug for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Renderable>> FromIterator<(K, V)> for Components {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Components {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
