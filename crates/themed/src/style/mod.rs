//! Style declarations and their merge semantics.
//!
//! - [`Style`]: an ordered map of style properties to values
//!
//! Declarations combine with [`Style::merge`]: properties from the later
//! declaration win, nested objects (pseudo-states, media queries) merge key by
//! key, and every other value replaces wholesale.

mod declaration;
mod merge;

pub use declaration::Style;
