//! Year range formatting.

/// Formats a start year and optional end year as a date range string.
///
/// A missing or zero start year yields an empty string. The start year is
/// returned on its own when the end year is missing, zero, or equal to the
/// start year; otherwise the two are joined with a hyphen. The order of the
/// years is not checked.
///
/// # Examples
///
/// ```
/// use copyright_date::format_date_range;
///
/// assert_eq!(format_date_range(None, Some(2024)), "");
/// assert_eq!(format_date_range(Some(2020), None), "2020");
/// assert_eq!(format_date_range(Some(2020), Some(2020)), "2020");
/// assert_eq!(format_date_range(Some(2020), Some(2024)), "2020-2024");
/// ```
#[must_use]
pub fn format_date_range(start_year: Option<i32>, end_year: Option<i32>) -> String {
    let Some(start) = start_year.filter(|year| *year != 0) else {
        return String::new();
    };

    match end_year.filter(|year| *year != 0) {
        Some(end) if end != start => format!("{start}-{end}"),
        _ => start.to_string(),
    }
}
