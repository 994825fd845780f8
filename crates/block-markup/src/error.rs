//! Error types for block names and attributes.

use thiserror::Error;

/// Errors raised while parsing a `namespace/slug` block name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockNameError {
    /// The name has no `/` between namespace and slug.
    #[error("block name '{value}' must have the form namespace/slug")]
    MissingSeparator {
        /// The rejected name.
        value: String,
    },

    /// The namespace segment is empty or contains unsupported characters.
    #[error("invalid block namespace '{value}': use lowercase letters, digits and hyphens")]
    InvalidNamespace {
        /// The rejected namespace.
        value: String,
    },

    /// The slug segment is empty or contains unsupported characters.
    #[error("invalid block slug '{value}': use lowercase letters, digits and hyphens")]
    InvalidSlug {
        /// The rejected slug.
        value: String,
    },
}

/// Errors raised while decoding block attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributesError {
    /// The attribute JSON is malformed or holds unexpected values.
    #[error("invalid block attributes: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },
}
