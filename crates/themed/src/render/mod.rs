//! Rendering evaluated content through a styled component registry.
//!
//! The host document evaluator produces a [`Content`] tree. A [`Provider`]
//! owns the theme and the installed registry and renders that tree depth
//! first, handing each component its already-rendered children and an
//! explicit [`RenderContext`] in place of ambient globals.

mod content;
mod context;
mod node;
mod provider;

pub use content::Content;
pub use context::{Component, RenderContext};
pub use node::{Attributes, Node, Props};
pub use provider::Provider;
