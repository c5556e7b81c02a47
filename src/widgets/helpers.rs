//! Formatting helpers for plot listing fields.
//!
//! This module contains the pure display functions used by the detail
//! panel and its widgets:
//! - Indian-locale number grouping (`12,34,567`)
//! - Price, price-per-area, dimension and area text
//! - Listing date and integrity hash previews
//! - Image reference labels

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::constants::{HASH_PREVIEW_LEN, NOT_AVAILABLE, RUPEE_SYMBOL};

// ============================================================================
// Constants
// ============================================================================

/// One crore (10 million).
const CRORE: f64 = 10_000_000.0;

/// One lakh (100 thousand).
const LAKH: f64 = 100_000.0;

/// Maximum fraction digits kept by grouped numbers.
const MAX_FRACTION_DIGITS: usize = 3;

// ============================================================================
// Number Formatting
// ============================================================================

/// Group an integer digit string the Indian way: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Format a number with Indian digit grouping.
///
/// Keeps at most three fraction digits and drops trailing zeros.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_indian_number(2083.0), "2,083");
/// assert_eq!(format_indian_number(1_234_567.0), "12,34,567");
/// assert_eq!(format_indian_number(1200.5), "1,200.5");
/// ```
#[must_use]
pub fn format_indian_number(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = format!("{:.prec$}", value.abs(), prec = MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut result = String::with_capacity(rounded.len() + 6);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        result.push('-');
    }
    result.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }
    result
}

// ============================================================================
// Price Formatting
// ============================================================================

/// Short locale-appropriate price text.
///
/// Crore and lakh amounts are abbreviated with two decimals; smaller
/// amounts are shown in full with Indian grouping.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_price_display(25_000_000.0), "₹2.50 Cr");
/// assert_eq!(format_price_display(2_500_000.0), "₹25.00 L");
/// assert_eq!(format_price_display(85_000.0), "₹85,000");
/// ```
#[must_use]
pub fn format_price_display(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let magnitude = amount.abs();
    if magnitude >= CRORE {
        format!("{RUPEE_SYMBOL}{:.2} Cr", amount / CRORE)
    } else if magnitude >= LAKH {
        format!("{RUPEE_SYMBOL}{:.2} L", amount / LAKH)
    } else {
        format!("{RUPEE_SYMBOL}{}", format_indian_number(amount))
    }
}

/// Price per square foot, e.g. `₹1,200 per sq ft`.
#[must_use]
pub fn format_price_per_sqft(price_per_sqft: f64) -> String {
    format!(
        "{RUPEE_SYMBOL}{} per sq ft",
        format_indian_number(price_per_sqft)
    )
}

// ============================================================================
// Dimension Formatting
// ============================================================================

/// Length or width with two decimals, or `N/A` when absent or zero.
#[must_use]
pub fn format_dimension(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => format!("{v:.2}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Total area with Indian grouping.
#[must_use]
pub fn format_area(area_sqft: f64) -> String {
    format_indian_number(area_sqft)
}

/// Owner verification flag as display text.
#[must_use]
pub const fn format_owner_verified(verified: bool) -> &'static str {
    if verified { "Yes" } else { "Pending" }
}

// ============================================================================
// Date Formatting
// ============================================================================

/// Parse a row-store timestamp.
///
/// Accepts RFC 3339 (`2024-03-15T10:20:30.5+00:00`), timestamps without an
/// offset (read as UTC) and bare dates.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Listing date as `day short-month year` in the given time zone.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_listed_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.with_timezone(tz).format("%-d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Listing date in the local time zone, e.g. `15 Mar 2024`.
#[must_use]
pub fn format_listed_date(raw: &str) -> String {
    format_listed_date_in(raw, &Local)
}

// ============================================================================
// Text Truncation
// ============================================================================

/// Integrity hash preview: the first 16 characters followed by `...`.
#[must_use]
pub fn truncate_hash(hash: &str) -> String {
    let prefix: String = hash.chars().take(HASH_PREVIEW_LEN).collect();
    format!("{prefix}...")
}

/// Truncate text to `max_len` characters with an ellipsis in the middle.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_middle("https://cdn.example.com/plots/a.jpg", 20), "https://c...ts/a.jpg");
/// ```
#[must_use]
pub fn truncate_middle(text: &str, max_len: usize) -> String {
    let len = text.chars().count();
    if len <= max_len {
        return text.to_string();
    }

    if max_len < 7 {
        return text.chars().take(max_len).collect();
    }

    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = text.chars().take(prefix_len).collect();
    let suffix: String = text.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

/// Short label for an image reference: the last path segment without query.
#[must_use]
pub fn image_label(reference: &str) -> &str {
    let without_query = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
        .trim_end_matches('/');

    match without_query.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => reference,
    }
}

// ============================================================================
// Tests
// ============================================================================
