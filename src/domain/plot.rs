//! The plot listing record.
//!
//! A [`Plot`] is one row of the `plots` table as returned by PostgREST.
//! Deserialization is lenient about the shapes rows take in practice:
//! numeric columns may arrive as strings, any nullable column may be
//! `null`, and optional text columns may be missing or empty.

use serde::{Deserialize, Deserializer, Serialize};

use super::status::VerificationStatus;

// ============================================================================
// Plot
// ============================================================================

/// A real-estate plot listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    /// Primary key.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Listing title.
    #[serde(default, deserialize_with = "de_null_default")]
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Street address.
    #[serde(default, deserialize_with = "de_null_default")]
    pub location_address: String,
    /// City.
    #[serde(default, deserialize_with = "de_null_default")]
    pub city: String,
    /// State.
    #[serde(default, deserialize_with = "de_null_default")]
    pub state: String,
    /// Asking price in rupees.
    #[serde(default, deserialize_with = "de_number")]
    pub price: f64,
    /// Price per square foot in rupees.
    #[serde(default, deserialize_with = "de_number")]
    pub price_per_sqft: f64,
    /// Total area in square feet.
    #[serde(default, deserialize_with = "de_number")]
    pub area_sqft: f64,
    /// Frontage length in feet.
    #[serde(default, deserialize_with = "de_opt_number")]
    pub length_ft: Option<f64>,
    /// Depth in feet.
    #[serde(default, deserialize_with = "de_opt_number")]
    pub width_ft: Option<f64>,
    /// Image references, in display order.
    #[serde(default, deserialize_with = "de_images")]
    pub images: Vec<String>,
    /// Display name of the listing owner.
    #[serde(default, deserialize_with = "de_null_default")]
    pub owner_name: String,
    /// Display name of the registered property owner.
    #[serde(default, deserialize_with = "de_null_default")]
    pub property_owner_name: String,
    /// Verification state of the listing.
    #[serde(
        default = "default_verification_status",
        deserialize_with = "de_verification_status"
    )]
    pub verification_status: VerificationStatus,
    /// Lifecycle status, free-form (e.g. `"available"`, `"sold"`).
    #[serde(default, deserialize_with = "de_null_default")]
    pub status: String,
    /// Whether the owner's identity is verified.
    #[serde(default, deserialize_with = "de_null_default")]
    pub owner_verified: bool,
    /// Creation timestamp as returned by the row-store.
    #[serde(default, deserialize_with = "de_null_default")]
    pub created_at: String,
    /// Content-integrity hash, e.g. a blockchain reference.
    #[serde(default)]
    pub blockchain_hash: Option<String>,
}

impl Plot {
    /// Street, city and state joined for display.
    #[must_use]
    pub fn address_line(&self) -> String {
        [
            self.location_address.as_str(),
            self.city.as_str(),
            self.state.as_str(),
        ]
        .join(", ")
    }

    /// Description, if present and not blank.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Integrity hash, if present and not blank.
    #[must_use]
    pub fn blockchain_hash(&self) -> Option<&str> {
        non_blank(self.blockchain_hash.as_deref())
    }

    /// Image reference at `index`.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_verification_status() -> VerificationStatus {
    VerificationStatus::Unknown(String::new())
}

// ============================================================================
// Lenient Deserializers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Number(f64),
    Text(String),
}

impl NumberRepr {
    fn into_f64<E: serde::de::Error>(self) -> Result<Option<f64>, E> {
        match self {
            Self::Number(n) => Ok(Some(n)),
            Self::Text(text) if text.trim().is_empty() => Ok(None),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid numeric value '{text}'"))),
        }
    }
}

fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberRepr>::deserialize(deserializer)? {
        Some(repr) => repr.into_f64(),
        None => Ok(None),
    }
}

fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    de_opt_number(deserializer).map(|value| value.unwrap_or(0.0))
}

/// `null` becomes the type's default, as a missing key does.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn de_verification_status<'de, D>(deserializer: D) -> Result<VerificationStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<VerificationStatus>::deserialize(deserializer)?
        .unwrap_or_else(default_verification_status))
}

fn de_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Integer(i64),
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(id) => id,
        IdRepr::Integer(id) => id.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
