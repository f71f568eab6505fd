//! Structural check of the chart payload.
//!
//! The schema is embedded from `schemas/tiva-data.json` (JSON Schema
//! Draft 7). It describes the contract with the chart page: required
//! keys, field types, region keys, `#RRGGBB` colors and the `_all`
//! breakdown. It says nothing about whether the numbers are right.
//!
//! Key uniqueness inside lists is not expressible in the schema and is
//! checked separately by [`validate_document`].

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashSet;

use crate::models::OutputDocument;

static DATA_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../schemas/tiva-data.json"))
        .expect("Invalid embedded schema")
});

/// Validate a JSON value against a schema.
///
/// Returns every violation as a message.
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate raw JSON against the payload schema.
pub fn validate_payload(data: &Value) -> Result<(), Vec<String>> {
    validate(&DATA_SCHEMA, data)
}

/// Quick check against the payload schema.
pub fn is_valid_payload(data: &Value) -> bool {
    jsonschema::draft7::is_valid(&DATA_SCHEMA, data)
}

/// Validate a built document: schema plus unique codes per list.
pub fn validate_document(doc: &OutputDocument) -> Result<(), Vec<String>> {
    let json = serde_json::to_value(doc).map_err(|e| vec![e.to_string()])?;
    let mut errors = validate_payload(&json).err().unwrap_or_default();

    let mut seen = HashSet::new();
    for industry in &doc.industries {
        if !seen.insert(industry.code.as_str()) {
            errors.push(format!("duplicate industry code '{}'", industry.code));
        }
    }

    for (key, rows) in doc.by_industry.iter() {
        let mut seen = HashSet::new();
        for row in rows {
            if !seen.insert(row.country_code.as_str()) {
                errors.push(format!(
                    "duplicate country '{}' in byIndustry['{}']",
                    row.country_code, key
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ByIndustry, CountryRecord, IndustryRecord, RegionKey};
    use serde_json::json;

    fn deu(value: f64) -> CountryRecord {
        CountryRecord {
            country_code: "DEU".into(),
            country_name: "Nemecko".into(),
            region_key: RegionKey::Europe,
            region_label: "Európa".into(),
            color: "#60A5FA".into(),
            value,
        }
    }

    fn document() -> OutputDocument {
        let mut by = ByIndustry::new();
        by.insert("A", vec![deu(150.0)]);
        by.insert("_all", vec![deu(150.0)]);
        OutputDocument {
            industries: vec![IndustryRecord {
                code: "A".into(),
                label: "Poľnohospodárstvo a lesníctvo".into(),
                group: "Primárny sektor".into(),
                color: "#DC9354".into(),
                value: 150.0,
            }],
            by_industry: by,
        }
    }

    #[test]
    fn test_valid_document() {
        assert!(validate_document(&document()).is_ok());
    }

    #[test]
    fn test_missing_all_key() {
        let payload = json!({ "industries": [], "byIndustry": {} });
        assert!(!is_valid_payload(&payload));
    }

    #[test]
    fn test_bad_region_and_color() {
        let payload = json!({
            "industries": [],
            "byIndustry": {
                "_all": [{
                    "countryCode": "DEU",
                    "countryName": "Nemecko",
                    "regionKey": "Mars",
                    "regionLabel": "?",
                    "color": "blue",
                    "value": 1.0
                }]
            }
        });
        let errors = validate_payload(&payload).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_duplicate_country_rejected() {
        let mut doc = document();
        doc.by_industry.insert("A", vec![deu(1.0), deu(2.0)]);
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors[0].contains("duplicate country 'DEU'"));
    }

    #[test]
    fn test_negative_values_are_not_a_contract_violation() {
        let mut doc = document();
        doc.industries[0].value = -3.0;
        assert!(validate_document(&doc).is_ok());
    }
}
