//! Provider: installs a styled registry and a theme for a subtree.

use std::sync::Arc;

use tracing::debug;

use super::content::Content;
use super::context::RenderContext;
use super::node::Node;
use crate::components::{Components, StyledCache};
use crate::error::{ConfigError, RenderError};
use crate::theme::Theme;

/// Renders evaluated content with a theme and a styled component registry.
///
/// The base registry is the default table with any document components
/// layered on top. It is wrapped once and reused across renders until the
/// base registry is replaced.
///
/// # Example
///
/// ```rust
/// use themed::{Components, Content, Node, Props, Provider, RenderContext, Renderable, Style, Theme};
///
/// let beep = Renderable::component(|_cx: &RenderContext<'_>, props: Props, children: Vec<Node>| {
///     Node::element("p", props, children)
/// });
///
/// let provider = Provider::new(Theme::new().add_style("Beep", Style::new().set("color", "tomato")))
///     .with_components(Components::new().with("Beep", beep));
///
/// let node = provider.render(&Content::element("Beep", Props::new(), vec![])).unwrap();
/// assert_eq!(node.tag(), Some("p"));
/// assert_eq!(node.style().unwrap().get("color"), Some(&"tomato".into()));
/// ```
#[derive(Debug)]
pub struct Provider {
    theme: Option<Theme>,
    components: Arc<Components>,
    cache: StyledCache,
}

impl Provider {
    /// Creates a provider over the default component table.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            components: Arc::new(Components::defaults()),
            cache: StyledCache::new(),
        }
    }

    /// Creates a provider without a theme. Only instance styles apply.
    pub fn without_theme() -> Self {
        Self {
            theme: None,
            components: Arc::new(Components::defaults()),
            cache: StyledCache::new(),
        }
    }

    /// Layers document components over the default table.
    pub fn with_components(mut self, components: Components) -> Self {
        self.components = Arc::new(Components::defaults().merge(&components));
        self
    }

    /// Installs a shared base registry as is.
    ///
    /// The styled registry is rebuilt only when a different `Arc` is
    /// installed.
    pub fn with_registry(mut self, components: Arc<Components>) -> Self {
        self.components = components;
        self
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Replaces the theme. The next render sees the new theme.
    pub fn set_theme(&mut self, theme: Option<Theme>) {
        self.theme = theme;
    }

    /// Replaces the base registry. The next render rebuilds the styled one.
    pub fn set_registry(&mut self, components: Arc<Components>) {
        debug!(components = components.len(), "replacing base component registry");
        self.components = components;
    }

    /// Returns the base registry.
    pub fn registry(&self) -> &Arc<Components> {
        &self.components
    }

    /// Returns the styled registry installed for rendering.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the base registry has an entry that
    /// cannot be rendered.
    pub fn components(&self) -> Result<Arc<Components>, ConfigError> {
        self.cache.get_or_build(&self.components)
    }

    /// Renders a content tree.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] if the registry cannot be installed and
    /// [`RenderError::MissingComponent`] if the content references a
    /// component that is not registered.
    pub fn render(&self, content: &Content) -> Result<Node, RenderError> {
        let components = self.components()?;
        let cx = RenderContext::new(self.theme.as_ref(), &components);
        cx.render(content)
    }
}
