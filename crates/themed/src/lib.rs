//! # Themed - theme-driven styles for document components
//!
//! Themed decides which style rules apply to each component of a rendered
//! structured-text document. Components are identified by semantic keys
//! (`h1`, `p`, `td`, `inlineCode`, or application components such as `Beep`);
//! their styles live in an application-supplied theme under `styles.<key>`.
//!
//! - [`resolve`] / [`themed`]: look up the theme declaration for a key
//! - [`Style`]: a style declaration with recursive merge semantics
//! - [`Components`]: a registry of component implementations
//! - [`build_styled`] / [`StyledCache`]: wrap a registry so every entry
//!   merges its theme style beneath the instance `sx` style at render time
//! - [`Provider`]: installs a theme and a styled registry and renders
//!   evaluated [`Content`]
//! - [`compute`]: turn theme tokens (`color: primary`) into literal values
//!
//! ## Quick Start
//!
//! ```rust
//! use themed::{Content, Props, Provider, Style, Theme};
//! use serde_json::json;
//!
//! let theme = Theme::from_value(json!({
//!     "colors": { "primary": "#07c" },
//!     "styles": {
//!         "h1": { "color": "primary", "fontSize": 32 }
//!     }
//! }));
//!
//! let provider = Provider::new(theme);
//! let heading = Content::element(
//!     "h1",
//!     Props::new().sx(Style::new().set("fontSize", 48)),
//!     vec!["The Heading".into()],
//! );
//!
//! let node = provider.render(&heading).unwrap();
//! assert_eq!(node.tag(), Some("h1"));
//! assert_eq!(
//!     serde_json::to_value(node.style().unwrap()).unwrap(),
//!     json!({ "color": "primary", "fontSize": 48 })
//! );
//! ```
//!
//! ## Precedence
//!
//! For every component invocation the styling prop handed to the wrapped
//! implementation is built from, lowest to highest:
//!
//! 1. `textAlign` from the `align` attribute (table cells only)
//! 2. the theme declaration at `styles.<key>`
//! 3. the instance declaration passed as `sx`
//!
//! Nested declarations (`":hover"`, media queries) merge key by key.
//!
//! ## Failure Policy
//!
//! Missing themes, missing style entries and oddly shaped themes resolve to
//! an empty declaration. Registries with entries that cannot be rendered are
//! rejected when the styled registry is built, with the offending key named
//! in the [`ConfigError`].

pub mod components;
mod engine;
mod error;
pub mod render;
pub mod style;
pub mod theme;
mod util;

pub use components::{
    build_styled, styled_defaults, Components, Renderable, StyledCache, ALIGNED_CELLS,
    DEFAULT_COMPONENTS,
};
pub use engine::{compute, TokenEngine};
pub use error::{ConfigError, RenderError, ThemeError};
pub use render::{Attributes, Component, Content, Node, Props, Provider, RenderContext};
pub use style::Style;
pub use theme::{resolve, set_mode_detector, themed, ColorMode, Theme, STYLES};
pub use util::{is_element_name, value_kind};
