//! Records of the chart payload.
//!
//! - [`IndustryRecord`] - total value added of one source industry
//! - [`CountryRecord`] - value added absorbed by one destination country
//! - [`RegionKey`] - geographic bucket of a destination country
//! - [`ByIndustry`] - country breakdowns keyed by industry code, plus `_all`
//! - [`OutputDocument`] - the complete `data.json` document

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Key of the breakdown aggregated across all industries.
pub const ALL_INDUSTRIES_KEY: &str = "_all";

// =============================================================================
// Region
// =============================================================================

/// Geographic region of a destination country.
///
/// The five keys partition every country code: anything outside the
/// four named regions is [`RegionKey::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegionKey {
    Europe,
    Americas,
    AsiaPacific,
    #[serde(rename = "AfricaME")]
    AfricaMe,
    Other,
}

impl RegionKey {
    pub const ALL: [RegionKey; 5] = [
        RegionKey::Europe,
        RegionKey::Americas,
        RegionKey::AsiaPacific,
        RegionKey::AfricaMe,
        RegionKey::Other,
    ];

    /// Key as written to JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKey::Europe => "Europe",
            RegionKey::Americas => "Americas",
            RegionKey::AsiaPacific => "AsiaPacific",
            RegionKey::AfricaMe => "AfricaME",
            RegionKey::Other => "Other",
        }
    }

    /// Slovak display label.
    pub fn label(&self) -> &'static str {
        match self {
            RegionKey::Europe => "Európa",
            RegionKey::Americas => "Amerika",
            RegionKey::AsiaPacific => "Ázia a Pacifik",
            RegionKey::AfricaMe => "Afrika a Blízky východ",
            RegionKey::Other => "Ostatné krajiny",
        }
    }

    /// Chart color of the region.
    pub fn color(&self) -> &'static str {
        match self {
            RegionKey::Europe => "#60A5FA",
            RegionKey::Americas => "#52DCCE",
            RegionKey::AsiaPacific => "#E083AC",
            RegionKey::AfricaMe => "#BF8F1C",
            RegionKey::Other => "#837E7B",
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// Aggregated value added of one source industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryRecord {
    /// TiVA activity code (e.g. `C10T12`).
    pub code: String,
    pub label: String,
    pub group: String,
    /// `#RRGGBB`
    pub color: String,
    /// Millions of USD.
    pub value: f64,
}

/// Aggregated value added absorbed by one destination country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-3 code as found in the input.
    pub country_code: String,
    pub country_name: String,
    pub region_key: RegionKey,
    pub region_label: String,
    /// Region color, `#RRGGBB`.
    pub color: String,
    /// Millions of USD.
    pub value: f64,
}

// =============================================================================
// Breakdown by industry
// =============================================================================

/// Country breakdowns keyed by industry code.
///
/// Serialized as a JSON object whose keys keep insertion order: the
/// industries in the order of [`OutputDocument::industries`], then `_all`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByIndustry {
    entries: Vec<(String, Vec<CountryRecord>)>,
}

impl ByIndustry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the breakdown for `key`.
    pub fn insert(&mut self, key: impl Into<String>, rows: Vec<CountryRecord>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = rows,
            None => self.entries.push((key, rows)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[CountryRecord]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, rows)| rows.as_slice())
    }

    /// Breakdown across all industries.
    pub fn all(&self) -> Option<&[CountryRecord]> {
        self.get(ALL_INDUSTRIES_KEY)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CountryRecord])> {
        self.entries.iter().map(|(k, rows)| (k.as_str(), rows.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ByIndustry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, rows) in &self.entries {
            map.serialize_entry(key, rows)?;
        }
        map.end()
    }
}

// =============================================================================
// Output document
// =============================================================================

/// The complete payload read by the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    /// Sorted by value, descending.
    pub industries: Vec<IndustryRecord>,
    pub by_industry: ByIndustry,
}

impl OutputDocument {
    /// Distinct destination countries across all industries.
    pub fn country_count(&self) -> usize {
        self.by_industry.all().map(|rows| rows.len()).unwrap_or(0)
    }
}

// =============================================================================
// Tests
// =============================================================================
