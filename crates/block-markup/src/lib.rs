//! Markup generation for the scaffolded content block.
//!
//! The block stores a rich-text paragraph and a text alignment. This crate
//! produces the HTML the block emits in two places:
//!
//! - [`render_block`] mirrors the server render callback: content is
//!   sanitised and empty content renders nothing
//! - [`save_markup`] mirrors the editor's static save output, which embeds
//!   the stored content as-is
//!
//! # Example
//!
//! ```
//! use block_markup::{BlockAttributes, BlockName, render_block};
//!
//! let name: BlockName = "acme/notice".parse().expect("valid block name");
//! let attributes = BlockAttributes::from_json(r#"{"content": "Hello", "alignment": "left"}"#)
//!     .expect("valid attributes");
//!
//! assert_eq!(
//!     render_block(&name, &attributes),
//!     r#"<div class="wp-block-acme-notice has-text-align-left"><div class="wp-block-acme-notice__content"><p>Hello</p></div></div>"#
//! );
//! ```

mod attributes;
mod error;
mod name;
mod render;

pub use attributes::{Alignment, BlockAttributes};
pub use error::{AttributesError, BlockNameError};
pub use name::BlockName;
pub use render::{ALLOWED_FORMATS, render_block, save_markup};
