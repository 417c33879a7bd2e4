//! The component capability and the per-render context.

use tracing::trace;

use super::content::Content;
use super::node::{Node, Props};
use crate::components::Components;
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::{is_component_name, is_element_name};

/// A renderable component.
///
/// Components receive the render context, their props and their
/// already-rendered children, and produce a [`Node`]. Closures with the same
/// signature implement this trait.
///
/// # Example
///
/// ```rust
/// use themed::{Component, Node, Props, RenderContext};
///
/// fn callout(_cx: &RenderContext<'_>, props: Props, children: Vec<Node>) -> Node {
///     Node::element("aside", props, children)
/// }
///
/// fn assert_component<C: Component>(_: C) {}
/// assert_component(callout);
/// ```
pub trait Component: Send + Sync {
    /// Renders the component.
    fn render(&self, cx: &RenderContext<'_>, props: Props, children: Vec<Node>) -> Node;
}

impl<F> Component for F
where
    F: Fn(&RenderContext<'_>, Props, Vec<Node>) -> Node + Send + Sync,
{
    fn render(&self, cx: &RenderContext<'_>, props: Props, children: Vec<Node>) -> Node {
        self(cx, props, children)
    }
}

/// What a component can see while it renders.
///
/// The theme and the installed registry are snapshots for the duration of
/// one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    theme: Option<&'a Theme>,
    components: &'a Components,
}

impl<'a> RenderContext<'a> {
    /// Creates a context over a theme and an installed registry.
    pub fn new(theme: Option<&'a Theme>, components: &'a Components) -> Self {
        Self { theme, components }
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Option<&'a Theme> {
        self.theme
    }

    /// Returns the installed component registry.
    pub fn components(&self) -> &'a Components {
        self.components
    }

    /// Renders a content tree, children first.
    pub fn render(&self, content: &Content) -> Result<Node, RenderError> {
        match content {
            Content::Text(value) => Ok(Node::text(value.clone())),
            Content::Fragment(items) => Ok(Node::Fragment {
                children: self.render_all(items)?,
            }),
            Content::Element {
                key,
                props,
                children,
            } => {
                let children = self.render_all(children)?;
                self.render_component(key, props.clone(), children)
            }
        }
    }

    /// Invokes the component installed under `key`.
    ///
    /// Keys without an installed component render as plain host elements
    /// when they are valid lowercase element names.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingComponent`] for capitalised keys (and
    /// invalid element names) that the registry does not provide.
    pub fn render_component(
        &self,
        key: &str,
        props: Props,
        children: Vec<Node>,
    ) -> Result<Node, RenderError> {
        if let Some(renderable) = self.components.get(key) {
            return Ok(renderable.render(self, props, children));
        }
        if !is_component_name(key) && is_element_name(key) {
            trace!(key, "rendering unregistered key as a host element");
            return Ok(Node::element(key, props, children));
        }
        Err(RenderError::MissingComponent {
            key: key.to_string(),
        })
    }

    fn render_all(&self, items: &[Content]) -> Result<Vec<Node>, RenderError> {
        items.iter().map(|item| self.render(item)).collect()
    }
}
