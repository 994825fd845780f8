//! Server render and static save markup.
//!
//! Both outputs share one wrapper structure:
//!
//! ```text
//! <div class="wp-block-{namespace}-{slug} has-text-align-{alignment} {className}">
//!   <div class="wp-block-{namespace}-{slug}__content"><p>{content}</p></div>
//! </div>
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::attributes::BlockAttributes;
use crate::name::BlockName;

/// Inline formats the editor offers for the paragraph content.
pub const ALLOWED_FORMATS: [&str; 4] = [
    "core/bold",
    "core/italic",
    "core/link",
    "core/strikethrough",
];

/// Renders the block on the server.
///
/// Content is sanitised first, keeping only the markup produced by
/// [`ALLOWED_FORMATS`]. When nothing survives sanitising, or the content is
/// the bare string `"0"`, the block renders as an empty string.
///
/// # Examples
///
/// ```
/// use block_markup::{BlockAttributes, BlockName, render_block};
///
/// let name = BlockName::new("acme", "notice").expect("valid block name");
/// let empty = BlockAttributes::default();
/// assert_eq!(render_block(&name, &empty), "");
///
/// let scripted = BlockAttributes {
///     content: "Hi<script>alert(1)</script>".to_owned(),
///     ..BlockAttributes::default()
/// };
/// assert!(!render_block(&name, &scripted).contains("script"));
/// ```
#[must_use]
pub fn render_block(name: &BlockName, attributes: &BlockAttributes) -> String {
    let content = ammonia::Builder::default()
        .tags(allowed_tags())
        .clean(&attributes.content)
        .to_string();
    if is_blank(&content) {
        debug!(block = %name, "block content empty after sanitising");
        return String::new();
    }
    block_html(name, attributes, &content)
}

/// Builds the static markup the editor saves into post content.
///
/// Stored content is embedded unchanged and empty content still produces the
/// wrapper elements.
///
/// # Example
///
/// ```
/// use block_markup::{Alignment, BlockAttributes, BlockName, save_markup};
///
/// let name = BlockName::new("acme", "notice").expect("valid block name");
/// let attributes = BlockAttributes {
///     alignment: Alignment::Right,
///     ..BlockAttributes::default()
/// };
///
/// assert_eq!(
///     save_markup(&name, &attributes),
///     r#"<div class="wp-block-acme-notice has-text-align-right"><div class="wp-block-acme-notice__content"><p></p></div></div>"#
/// );
/// ```
#[must_use]
pub fn save_markup(name: &BlockName, attributes: &BlockAttributes) -> String {
    block_html(name, attributes, &attributes.content)
}

fn allowed_tags() -> HashSet<&'static str> {
    ALLOWED_FORMATS
        .iter()
        .copied()
        .filter_map(format_tag)
        .collect()
}

fn format_tag(format: &str) -> Option<&'static str> {
    match format {
        "core/bold" => Some("strong"),
        "core/italic" => Some("em"),
        "core/link" => Some("a"),
        "core/strikethrough" => Some("s"),
        _ => None,
    }
}

fn is_blank(content: &str) -> bool {
    content.is_empty() || content == "0"
}

fn block_html(name: &BlockName, attributes: &BlockAttributes, content: &str) -> String {
    format!(
        r#"<div class="{classes}"><div class="{content_class}"><p>{content}</p></div></div>"#,
        classes = class_list(name, attributes),
        content_class = name.content_class(),
    )
}

fn class_list(name: &BlockName, attributes: &BlockAttributes) -> String {
    let mut classes = vec![name.wrapper_class(), attributes.alignment.css_class()];
    if let Some(extra) = attributes.extra_classes() {
        classes.extend(extra.split_whitespace().map(ammonia::clean_text));
    }
    classes.join(" ")
}
