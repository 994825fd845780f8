//! Copyright year validation and notice formatting.
//!
//! This crate builds the short copyright notices shown in rendered block
//! output, such as `© 2020-2024 Acme Corp`. Every operation degrades to an
//! empty string or `false` for unusable input instead of failing, so callers
//! can treat an empty result as "nothing to display".
//!
//! # Overview
//!
//! - [`current_year`] reads the calendar year from the host clock
//! - [`format_date_range`] renders a single year or a hyphenated pair
//! - [`is_valid_copyright_year`] accepts whole numbers from
//!   [`MIN_COPYRIGHT_YEAR`] up to the current year
//! - [`copyright_text`] composes the three into a display-ready notice
//!
//! [`CopyrightFormatter`] offers the same operations against an injected
//! [`mockable::Clock`], and the `*_at` functions take the current year as an
//! explicit argument.
//!
//! # Example
//!
//! ```
//! use copyright_date::{copyright_text_at, format_date_range};
//!
//! assert_eq!(format_date_range(Some(2020), Some(2024)), "2020-2024");
//! assert_eq!(copyright_text_at(2020, "Acme Corp", 2024), "© 2020-2024 Acme Corp");
//! assert_eq!(copyright_text_at("2020", "Acme Corp", 2024), "");
//! ```

mod error;
mod formatter;
mod range;
mod year;

pub use error::CopyrightYearError;
pub use formatter::{
    CopyrightFormatter, MIN_COPYRIGHT_YEAR, copyright_text, copyright_text_at, current_year,
    is_valid_copyright_year, is_valid_copyright_year_at, validate_copyright_year_at,
};
pub use range::format_date_range;
pub use year::YearValue;
