//! Verification status of a plot listing and its presentation table.
//!
//! Status strings arrive from the row-store in snake_case
//! (`"pending_verification"`). They are parsed once into a closed
//! [`VerificationStatus`] and every display concern (label, icon, palette)
//! is answered by an explicit match instead of string shape.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status Glyphs
// ============================================================================

/// Check-mark glyph for verified listings.
pub const CHECK_GLYPH: &str = "✓";

/// Clock glyph for pending and unknown listings.
pub const CLOCK_GLYPH: &str = "◷";

/// Cross glyph for rejected listings.
pub const CROSS_GLYPH: &str = "✗";

// ============================================================================
// Status Palette
// ============================================================================

/// Named color palette for status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPalette {
    /// Verified listings.
    Emerald,
    /// Pending and pending-verification listings.
    Amber,
    /// Rejected listings.
    Red,
    /// Anything else.
    Slate,
}

impl StatusPalette {
    /// Foreground (text and icon) color.
    #[must_use]
    pub const fn fg(self) -> Color {
        match self {
            Self::Emerald => Color::Rgb(16, 185, 129),
            Self::Amber => Color::Rgb(245, 158, 11),
            Self::Red => Color::Rgb(239, 68, 68),
            Self::Slate => Color::Rgb(148, 163, 184),
        }
    }

    /// Border color, a muted tone of the foreground.
    #[must_use]
    pub const fn border(self) -> Color {
        match self {
            Self::Emerald => Color::Rgb(6, 95, 70),
            Self::Amber => Color::Rgb(146, 64, 14),
            Self::Red => Color::Rgb(153, 27, 27),
            Self::Slate => Color::Rgb(71, 85, 105),
        }
    }

    /// Bold text style in the palette's foreground color.
    #[must_use]
    pub fn text_style(self) -> Style {
        Style::default().fg(self.fg()).add_modifier(Modifier::BOLD)
    }

    /// Palette name, used in logs and tests.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emerald => "emerald",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Slate => "slate",
        }
    }
}

// ============================================================================
// Verification Status
// ============================================================================

/// Trust state of a listing, distinct from its lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerificationStatus {
    /// The listing has been verified.
    Verified,
    /// The listing is queued for verification.
    PendingVerification,
    /// The listing is pending.
    Pending,
    /// Verification was rejected.
    Rejected,
    /// Any other value, kept verbatim.
    Unknown(String),
}

impl VerificationStatus {
    /// Parse a raw status string.
    ///
    /// Matching ignores case and treats spaces and hyphens like underscores,
    /// so a label produced by [`Self::label`] parses back to the same value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match normalize_status_key(raw).as_str() {
            "verified" => Self::Verified,
            "pending_verification" => Self::PendingVerification,
            "pending" => Self::Pending,
            "rejected" => Self::Rejected,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Canonical row-store value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Verified => "verified",
            Self::PendingVerification => "pending_verification",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human-readable label, e.g. `"Pending Verification"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Verified => "Verified".to_string(),
            Self::PendingVerification => "Pending Verification".to_string(),
            Self::Pending => "Pending".to_string(),
            Self::Rejected => "Rejected".to_string(),
            Self::Unknown(raw) => {
                let label = humanize_status(raw);
                if label.is_empty() {
                    "Unknown".to_string()
                } else {
                    label
                }
            }
        }
    }

    /// Glyph shown in front of the label.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Verified => CHECK_GLYPH,
            Self::PendingVerification | Self::Pending => CLOCK_GLYPH,
            Self::Rejected => CROSS_GLYPH,
            Self::Unknown(_) => CLOCK_GLYPH,
        }
    }

    /// Badge palette for this status.
    #[must_use]
    pub const fn palette(&self) -> StatusPalette {
        match self {
            Self::Verified => StatusPalette::Emerald,
            Self::PendingVerification | Self::Pending => StatusPalette::Amber,
            Self::Rejected => StatusPalette::Red,
            Self::Unknown(_) => StatusPalette::Slate,
        }
    }
}

impl From<String> for VerificationStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<VerificationStatus> for String {
    fn from(status: VerificationStatus) -> Self {
        status.as_str().to_string()
    }
}

// ============================================================================
// Humanizing
// ============================================================================

/// Turn a snake_case status into title words.
///
/// Splits on underscores and whitespace, upper-cases the first letter of each
/// segment and joins with single spaces. Applying it to its own output returns
/// the same string.
///
/// ```ignore
/// assert_eq!(humanize_status("pending_verification"), "Pending Verification");
/// assert_eq!(humanize_status("Pending Verification"), "Pending Verification");
/// ```
#[must_use]
pub fn humanize_status(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn normalize_status_key(raw: &str) -> String {
    raw.trim()
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

// ============================================================================
// Tests
// ============================================================================
