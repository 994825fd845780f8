//! Block name parsing and derived CSS class names.

use std::fmt;
use std::str::FromStr;

use crate::error::BlockNameError;

/// A validated `namespace/slug` block name.
///
/// Both segments must start with a lowercase ASCII letter and contain only
/// lowercase letters, digits and hyphens.
///
/// # Example
///
/// ```
/// use block_markup::BlockName;
///
/// let name = BlockName::new("acme", "notice").expect("valid block name");
/// assert_eq!(name.to_string(), "acme/notice");
/// assert_eq!(name.wrapper_class(), "wp-block-acme-notice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockName {
    namespace: String,
    slug: String,
}

impl BlockName {
    /// Builds a block name from its two segments.
    ///
    /// # Errors
    ///
    /// Returns [`BlockNameError`] when either segment is malformed.
    pub fn new(namespace: &str, slug: &str) -> Result<Self, BlockNameError> {
        if !is_valid_segment(namespace) {
            return Err(BlockNameError::InvalidNamespace {
                value: namespace.to_owned(),
            });
        }
        if !is_valid_segment(slug) {
            return Err(BlockNameError::InvalidSlug {
                value: slug.to_owned(),
            });
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            slug: slug.to_owned(),
        })
    }

    /// Returns the namespace segment.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the slug segment.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the class applied to the block wrapper element.
    #[must_use]
    pub fn wrapper_class(&self) -> String {
        format!("wp-block-{}-{}", self.namespace, self.slug)
    }

    /// Returns the class applied to the inner content element.
    #[must_use]
    pub fn content_class(&self) -> String {
        format!("{}__content", self.wrapper_class())
    }
}

impl FromStr for BlockName {
    type Err = BlockNameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((namespace, slug)) = value.split_once('/') else {
            return Err(BlockNameError::MissingSeparator {
                value: value.to_owned(),
            });
        };
        Self::new(namespace, slug)
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.slug)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next().is_some_and(|first| first.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
