//! Themes and theme-driven style resolution.
//!
//! This module provides:
//!
//! - [`Theme`]: an open key/value tree supplied by the application
//! - [`resolve`] and [`themed`]: look up the declaration for a component key
//! - [`ColorMode`]: light or dark color mode, with OS detection
//!
//! Component overrides live under the reserved [`STYLES`] section of a theme,
//! keyed by component key:
//!
//! ```yaml
//! colors:
//!   primary: "#07c"
//! styles:
//!   h1:
//!     color: primary
//!   footer:
//!     background: skyblue
//! ```

mod mode;
mod resolve;
#[allow(clippy::module_inception)]
mod theme;

pub use mode::{set_mode_detector, ColorMode};
pub use resolve::{resolve, themed};
pub use theme::{Theme, STYLES};
