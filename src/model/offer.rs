//! Offer record as loaded from the offers JSON file.
//!
//! Offers are immutable once loaded and owned exclusively by the
//! `CatalogStore`. Numeric fields arrive as display strings
//! (`"50%"`, `"4.5"`); the accessors parse them on demand and report
//! malformed values as `None` rather than failing the load.

use crate::model::OfferId;
use serde::Deserialize;

/// A single discount offer.
#[derive(Debug, Clone, Deserialize)]
pub struct Offer {
    /// Identifier linking the offer to its detail record.
    #[serde(deserialize_with = "offer_id")]
    pub id: OfferId,

    /// Display title, also searched by the free-text filter.
    pub title: String,

    /// Enum-like category string (e.g. "kofe", "geyim").
    /// Matched case-sensitively by the category filter.
    pub category: String,

    /// Free-text location (e.g. "Nəsimi mts.").
    #[serde(default)]
    pub location: String,

    /// Discount with trailing percent sign, e.g. "50%".
    #[serde(default)]
    pub discount_amount: String,

    /// Rating as a numeric string, e.g. "4.5".
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub rating: Option<String>,

    /// Short description used on compact card layouts.
    #[serde(default)]
    pub mobile_description: String,

    /// Longer description used on wide card layouts.
    #[serde(default)]
    pub desktop_description: String,

    /// Card image URL; passed through the URL sanitizer before display.
    #[serde(default)]
    pub image_url: String,

    /// Extra search keywords beyond title and location.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    /// Plus-tier flag: offer requires the upgraded student card.
    #[serde(default, rename = "telebe+")]
    pub plus_tier: bool,
}

impl Offer {
    /// Discount as a number, parsed by stripping the trailing "%".
    /// Malformed values yield `None` and sort after all parseable offers.
    pub fn discount_percent(&self) -> Option<f64> {
        parse_loose_number(self.discount_amount.trim_end_matches('%'))
    }

    /// Rating as a number. Malformed or missing values yield `None`.
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.as_deref().and_then(parse_loose_number)
    }
}

/// Parse a trimmed numeric string, mapping NaN and parse failures to `None`.
fn parse_loose_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Deserialize an identifier field into a validated `OfferId`.
pub(crate) fn offer_id<'de, D>(deserializer: D) -> Result<OfferId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = string_or_number(deserializer)?;
    OfferId::new(raw).map_err(serde::de::Error::custom)
}

/// Accept either a JSON string or a JSON number for identifier-like fields.
/// The source data mixes both (`"id": 7` vs `"id": "7"`).
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        // Integral floats print without a trailing ".0" so that
        // `7` and `"7"` compare equal after conversion.
        Raw::Num(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Raw::Num(n) => n.to_string(),
    })
}

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    }))
}

// ===== Tests =====
