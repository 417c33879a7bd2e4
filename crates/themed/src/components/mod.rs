//! Component registries and style injection.
//!
//! - [`Components`]: an ordered map from component key to [`Renderable`]
//! - [`DEFAULT_COMPONENTS`]: the fixed table of document-structure keys
//! - [`build_styled`] / [`StyledCache`]: wrap every entry so it resolves its
//!   theme style at render time
//!
//! Wrapping is a pure `Components -> Components` transform. It never adds or
//! removes keys; every value in the output is a styled wrapper around the
//! corresponding input value.

mod defaults;
mod registry;
mod styled;

pub use defaults::{styled_defaults, DEFAULT_COMPONENTS};
pub use registry::{Components, Renderable};
pub use styled::{build_styled, StyledCache, ALIGNED_CELLS};
