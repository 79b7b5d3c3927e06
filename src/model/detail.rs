//! Per-offer detail record as loaded from the details JSON file.
//!
//! Details are richer than catalog offers: contact methods, requirement
//! lists, a validity date range and the full branch list. They are keyed
//! by the same identifier as the offer and looked up when the detail
//! overlay opens. A lookup miss is not an error; the view falls back to
//! default content.

use crate::model::OfferId;
use chrono::NaiveDate;
use serde::Deserialize;

/// Detail record for one offer.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferDetail {
    #[serde(deserialize_with = "super::offer::offer_id")]
    pub id: OfferId,

    pub title: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub discount_amount: String,

    #[serde(default, deserialize_with = "super::offer::opt_string_or_number")]
    pub rating: Option<String>,

    /// Review count, displayed verbatim next to the rating.
    #[serde(default, deserialize_with = "super::offer::opt_string_or_number")]
    pub reviews: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Secondary note shown below the description.
    #[serde(default, rename = "sub-description")]
    pub sub_description: Option<String>,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub map_url: String,

    /// Branch locations. The first entry doubles as the headline location.
    #[serde(default)]
    pub locations: Vec<String>,

    /// Usage requirements rendered as a checklist.
    #[serde(default)]
    pub requirements: Vec<String>,

    /// Contact methods with per-kind glyphs.
    #[serde(default)]
    pub contact_info: Vec<Contact>,

    /// Validity range as a [from, until] pair of display strings.
    #[serde(default)]
    pub valid_from_until: Vec<String>,
}

impl OfferDetail {
    /// Headline location: the first branch, if any.
    pub fn primary_location(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }

    /// Validity range joined for display, e.g. "01.09.2025 – 31.12.2025".
    pub fn validity_text(&self) -> Option<String> {
        if self.valid_from_until.is_empty() {
            None
        } else {
            Some(self.valid_from_until.join(" – "))
        }
    }

    /// Parsed expiry date (second element of the validity pair).
    /// Returns `None` when absent or unparseable; the overlay then shows
    /// the raw strings without an expiry marker.
    pub fn expires_on(&self) -> Option<NaiveDate> {
        let raw = self.valid_from_until.get(1)?;
        parse_display_date(raw)
    }

    /// Whether the offer has expired relative to `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on().is_some_and(|until| until < today)
    }
}

/// Parse the date formats the data files actually use.
fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

// ===== Contact =====

/// A single contact method on the detail overlay.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub value: String,
}

/// Contact method kind. Unknown kinds fall back to `Other` instead of
/// failing the whole detail record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Phone,
    Website,
    Email,
    Address,
    Social,
    Whatsapp,
    Instagram,
    Facebook,
    Telegram,
    #[serde(other)]
    Other,
}

impl ContactKind {
    /// Glyph rendered before the contact value.
    pub fn glyph(self) -> &'static str {
        match self {
            ContactKind::Phone | ContactKind::Other => "📞",
            ContactKind::Website => "🌐",
            ContactKind::Email => "✉",
            ContactKind::Address => "📍",
            ContactKind::Social => "📱",
            ContactKind::Whatsapp => "💬",
            ContactKind::Instagram => "📷",
            ContactKind::Facebook => "👥",
            ContactKind::Telegram => "✈",
        }
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(json: &str) -> OfferDetail {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_full_record() {
        let d = detail(
            r#"{
                "id": "3",
                "title": "Coffee Lab",
                "category": "kofe",
                "discount_amount": "20%",
                "rating": "4.7",
                "reviews": "128",
                "description": "Specialty coffee",
                "sub-description": "Weekdays only",
                "image_url": "https://example.com/c.jpg",
                "map_url": "https://maps.example.com/c",
                "locations": ["Nizami küç. 5", "28 May küç. 2"],
                "requirements": ["Student card"],
                "contact_info": [
                    {"type": "phone", "value": "+994 12 555 55 55"},
                    {"type": "instagram", "value": "@coffeelab"}
                ],
                "valid_from_until": ["01.09.2025", "31.12.2025"]
            }"#,
        );
        assert_eq!(d.primary_location(), Some("Nizami küç. 5"));
        assert_eq!(d.validity_text().unwrap(), "01.09.2025 – 31.12.2025");
        assert_eq!(d.contact_info[0].kind, ContactKind::Phone);
        assert_eq!(d.sub_description.as_deref(), Some("Weekdays only"));
    }

    #[test]
    fn unknown_contact_kind_falls_back_to_other() {
        let c: Contact =
            serde_json::from_str(r#"{"type": "pigeon", "value": "coo"}"#).unwrap();
        assert_eq!(c.kind, ContactKind::Other);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let d = detail(r#"{"id": "1", "title": "T"}"#);
        assert!(d.locations.is_empty());
        assert!(d.requirements.is_empty());
        assert!(d.contact_info.is_empty());
        assert_eq!(d.validity_text(), None);
        assert_eq!(d.primary_location(), None);
    }

    #[test]
    fn expires_on_parses_dotted_dates() {
        let d = detail(
            r#"{"id": "1", "title": "T", "valid_from_until": ["01.01.2025", "30.06.2025"]}"#,
        );
        assert_eq!(
            d.expires_on(),
            Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
        );
        assert!(d.is_expired(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
        assert!(!d.is_expired(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
    }

    #[test]
    fn unparseable_expiry_is_none() {
        let d = detail(
            r#"{"id": "1", "title": "T", "valid_from_until": ["soon", "later"]}"#,
        );
        assert_eq!(d.expires_on(), None);
        assert!(!d.is_expired(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
    }
}
