//! Plugin slug and namespace resolution.
//!
//! The slug names the main plugin file and the block directory. The
//! namespace prefixes the PHP version constant.

use camino::Utf8Path;

use crate::error::UpdateError;

/// Identifiers that locate the plugin's version strings.
///
/// # Example
///
/// ```
/// use update_version::PluginIdentity;
///
/// let identity = PluginIdentity::new("notice-block", None).expect("valid identity");
/// assert_eq!(identity.namespace(), "notice_block");
/// assert_eq!(identity.constant_prefix(), "NOTICE_BLOCK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginIdentity {
    slug: String,
    namespace: String,
}

impl PluginIdentity {
    /// Builds an identity, deriving the namespace from the slug when absent.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::InvalidIdentifier`] when the slug is not a
    /// plain file name component or the namespace is not a PHP identifier.
    pub fn new(slug: &str, namespace: Option<&str>) -> Result<Self, UpdateError> {
        if !is_valid_slug(slug) {
            return Err(UpdateError::InvalidIdentifier {
                field: "slug",
                value: slug.to_owned(),
            });
        }
        let resolved_namespace =
            namespace.map_or_else(|| slug.replace('-', "_"), ToOwned::to_owned);
        if !is_valid_namespace(&resolved_namespace) {
            return Err(UpdateError::InvalidIdentifier {
                field: "namespace",
                value: resolved_namespace,
            });
        }
        Ok(Self {
            slug: slug.to_owned(),
            namespace: resolved_namespace,
        })
    }

    /// Builds an identity whose slug defaults to the plugin root's name.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::UnresolvedSlug`] when no slug is supplied and
    /// the root has no final path component, or any error from
    /// [`PluginIdentity::new`].
    pub fn resolve(
        root: &Utf8Path,
        slug: Option<&str>,
        namespace: Option<&str>,
    ) -> Result<Self, UpdateError> {
        let resolved_slug = slug
            .or_else(|| root.file_name())
            .ok_or_else(|| UpdateError::UnresolvedSlug {
                root: root.to_path_buf(),
            })?;
        Self::new(resolved_slug, namespace)
    }

    /// Returns the plugin slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the plugin namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the upper-cased namespace used for PHP constants.
    #[must_use]
    pub fn constant_prefix(&self) -> String {
        self.namespace.to_ascii_uppercase()
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn is_valid_namespace(namespace: &str) -> bool {
    let mut chars = namespace.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
