//! Copyright year validation and notice composition.

use std::fmt;
use std::sync::Arc;

use chrono::Datelike;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::error::CopyrightYearError;
use crate::range::format_date_range;
use crate::year::YearValue;

/// Earliest year accepted as a copyright start year.
pub const MIN_COPYRIGHT_YEAR: i32 = 1900;

const COPYRIGHT_SIGN: &str = "©";

/// Returns the current calendar year from the host clock.
///
/// # Example
///
/// ```
/// use copyright_date::current_year;
///
/// assert!(current_year() >= 2024);
/// ```
#[must_use]
pub fn current_year() -> i32 {
    year_of(&DefaultClock)
}

/// Checks a start year against the current host year.
///
/// # Examples
///
/// ```
/// use copyright_date::is_valid_copyright_year;
///
/// assert!(is_valid_copyright_year(1900));
/// assert!(!is_valid_copyright_year(1899));
/// assert!(!is_valid_copyright_year("2020"));
/// assert!(!is_valid_copyright_year(2020.5));
/// ```
#[must_use]
pub fn is_valid_copyright_year(year: impl Into<YearValue>) -> bool {
    is_valid_copyright_year_at(year, current_year())
}

/// Builds a copyright notice ending at the current host year.
///
/// # Example
///
/// ```
/// use copyright_date::copyright_text;
///
/// let notice = copyright_text(2020, "Acme Corp");
/// assert!(notice.starts_with("© 2020-"));
/// assert!(notice.ends_with(" Acme Corp"));
/// assert_eq!(copyright_text(1899, "Acme Corp"), "");
/// ```
#[must_use]
pub fn copyright_text(start_year: impl Into<YearValue>, holder: &str) -> String {
    copyright_text_at(start_year, holder, current_year())
}

/// Validates a start year against an explicit current year.
///
/// Only numbers are accepted. Floats must be finite with no fractional part,
/// and the year must lie between [`MIN_COPYRIGHT_YEAR`] and `current_year`
/// inclusive.
///
/// # Errors
///
/// Returns [`CopyrightYearError`] describing the first rule the value breaks.
///
/// # Example
///
/// ```
/// use copyright_date::{CopyrightYearError, validate_copyright_year_at};
///
/// assert_eq!(validate_copyright_year_at(2020.0, 2024), Ok(2020));
/// assert_eq!(
///     validate_copyright_year_at(2025, 2024),
///     Err(CopyrightYearError::InFuture { year: 2025, current: 2024 })
/// );
/// ```
pub fn validate_copyright_year_at(
    year: impl Into<YearValue>,
    current_year: i32,
) -> Result<i32, CopyrightYearError> {
    let whole = match year.into() {
        YearValue::Integer(value) => value,
        YearValue::Float(value) => integral_value(value)?,
        other => return Err(CopyrightYearError::NotNumeric { kind: other.kind() }),
    };

    if whole < i64::from(MIN_COPYRIGHT_YEAR) {
        return Err(CopyrightYearError::BeforeMinimum {
            year: whole,
            minimum: MIN_COPYRIGHT_YEAR,
        });
    }
    if whole > i64::from(current_year) {
        return Err(CopyrightYearError::InFuture {
            year: whole,
            current: current_year,
        });
    }

    i32::try_from(whole).map_err(|_| CopyrightYearError::InFuture {
        year: whole,
        current: current_year,
    })
}

/// Checks a start year against an explicit current year.
#[must_use]
pub fn is_valid_copyright_year_at(year: impl Into<YearValue>, current_year: i32) -> bool {
    validate_copyright_year_at(year, current_year).is_ok()
}

/// Builds a copyright notice ending at an explicit current year.
///
/// Returns an empty string when the start year is invalid. A non-empty
/// holder is appended after a single space.
///
/// # Examples
///
/// ```
/// use copyright_date::copyright_text_at;
///
/// assert_eq!(copyright_text_at(2020, "", 2024), "© 2020-2024");
/// assert_eq!(copyright_text_at(2024, "John Doe", 2024), "© 2024 John Doe");
/// ```
#[must_use]
pub fn copyright_text_at(
    start_year: impl Into<YearValue>,
    holder: &str,
    current_year: i32,
) -> String {
    let Ok(start) = validate_copyright_year_at(start_year, current_year)
        .inspect_err(|error| debug!(%error, "copyright start year rejected"))
    else {
        return String::new();
    };

    let year_range = format_date_range(Some(start), Some(current_year));
    if holder.is_empty() {
        format!("{COPYRIGHT_SIGN} {year_range}")
    } else {
        format!("{COPYRIGHT_SIGN} {year_range} {holder}")
    }
}

/// Copyright helpers bound to an injected clock.
///
/// # Example
///
/// ```
/// use copyright_date::CopyrightFormatter;
///
/// let formatter = CopyrightFormatter::default();
/// assert!(formatter.is_valid_copyright_year(formatter.current_year()));
/// ```
#[derive(Clone)]
pub struct CopyrightFormatter {
    clock: Arc<dyn Clock>,
}

impl CopyrightFormatter {
    /// Creates a formatter that reads the year from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Returns the current calendar year according to the clock.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        year_of(self.clock.as_ref())
    }

    /// Validates a start year against the clock's current year.
    ///
    /// # Errors
    ///
    /// Returns [`CopyrightYearError`] when the value is not an acceptable
    /// start year.
    pub fn validate_copyright_year(
        &self,
        year: impl Into<YearValue>,
    ) -> Result<i32, CopyrightYearError> {
        validate_copyright_year_at(year, self.current_year())
    }

    /// Checks a start year against the clock's current year.
    #[must_use]
    pub fn is_valid_copyright_year(&self, year: impl Into<YearValue>) -> bool {
        is_valid_copyright_year_at(year, self.current_year())
    }

    /// Builds a copyright notice ending at the clock's current year.
    ///
    /// The clock is read once, so validation and the range end always agree.
    #[must_use]
    pub fn copyright_text(&self, start_year: impl Into<YearValue>, holder: &str) -> String {
        copyright_text_at(start_year, holder, self.current_year())
    }
}

impl Default for CopyrightFormatter {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl fmt::Debug for CopyrightFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyrightFormatter")
            .field("current_year", &self.current_year())
            .finish_non_exhaustive()
    }
}

fn year_of(clock: &dyn Clock) -> i32 {
    clock.local().year()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is finite and integral; saturation keeps huge values out of range"
)]
fn integral_value(value: f64) -> Result<i64, CopyrightYearError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(CopyrightYearError::NotInteger { value });
    }
    Ok(value as i64)
}
