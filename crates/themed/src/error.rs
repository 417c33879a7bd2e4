//! Error types.
//!
//! Style lookups never fail: a missing theme or style entry resolves to an
//! empty declaration. The errors here cover the remaining surfaces:
//!
//! - [`ConfigError`]: a component registry that cannot be installed
//! - [`ThemeError`]: a theme that cannot be loaded from disk or text
//! - [`RenderError`]: a document that references a component nobody provides

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a component registry cannot be built.
///
/// Raised synchronously by [`build_styled`](crate::build_styled) and by the
/// data loaders on [`Components`](crate::Components), never deferred to
/// render time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A registry entry cannot be rendered.
    #[error("component '{key}' is not renderable: {reason}")]
    NotRenderable {
        /// The offending component key
        key: String,
        /// What was wrong with the value
        reason: String,
    },

    /// Registry data was not a mapping of keys to components.
    #[error("component registry must be a mapping, found {found}")]
    NotAMapping {
        /// JSON type name of the value that was supplied
        found: &'static str,
    },
}

/// Error returned when a theme cannot be loaded.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme '{}': {source}", .path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme text is not valid JSON.
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),

    /// The theme text is not valid YAML.
    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not name a known theme format.
    #[error("unsupported theme format '{}' (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat {
        /// Path with the unrecognised extension
        path: PathBuf,
    },
}

/// Error returned while rendering evaluated content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Content referenced a component that is not installed.
    #[error("expected component '{key}' to be defined: pass it in the component map")]
    MissingComponent {
        /// The missing component key
        key: String,
    },

    /// The installed registry could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_renderable_display_names_key() {
        let err = ConfigError::NotRenderable {
            key: "h1".to_string(),
            reason: "empty tag name".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'h1'"));
        assert!(msg.contains("empty tag name"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ThemeError::UnsupportedFormat {
            path: PathBuf::from("/themes/dark.toml"),
        };
        assert!(err.to_string().contains("dark.toml"));
    }

    #[test]
    fn test_missing_component_display() {
        let err = RenderError::MissingComponent {
            key: "Beep".to_string(),
        };
        assert!(err.to_string().contains("'Beep'"));
    }

    #[test]
    fn test_render_error_wraps_config_error() {
        let err: RenderError = ConfigError::NotAMapping { found: "array" }.into();
        assert_eq!(
            err.to_string(),
            "component registry must be a mapping, found array"
        );
    }
}
