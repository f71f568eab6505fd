//! Group-by-and-sum over observations.
//!
//! ```text
//! observations                     industries        byIndustry
//! ┌──────────────────┐            ┌──────────┐      ┌──────────────────┐
//! │ DEU  A   100     │            │ A   150  │      │ A:    DEU 150    │
//! │ DEU  A    50     │     →      │ G    70  │      │ G:    FRA 70     │
//! │ FRA  G    70     │            └──────────┘      │ _all: DEU 150    │
//! └──────────────────┘                              │       FRA 70     │
//!                                                   └──────────────────┘
//! ```
//!
//! Sums accumulate in input order. Results are sorted by value,
//! descending, ties broken by ascending code.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::observations::Observation;
use crate::models::{
    ByIndustry, CountryRecord, IndustryRecord, OutputDocument, ALL_INDUSTRIES_KEY,
};
use crate::reference::{country_name, country_region, industry_color, industry_meta};

/// Running totals keyed by code.
#[derive(Debug, Default)]
struct Totals<'a> {
    sums: BTreeMap<&'a str, f64>,
}

impl<'a> Totals<'a> {
    /// A group exists once any row names it, even if its value is missing.
    fn add(&mut self, key: &'a str, value: Option<f64>) {
        let sum = self.sums.entry(key).or_insert(0.0);
        if let Some(v) = value {
            *sum += v;
        }
    }

    fn sorted(&self) -> Vec<(&'a str, f64)> {
        let mut rows: Vec<_> = self.sums.iter().map(|(k, v)| (*k, *v)).collect();
        rows.sort_by(|a, b| by_value_desc(a.1, b.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

fn by_value_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Accumulates both aggregations in a single pass.
#[derive(Debug, Default)]
pub struct Aggregator<'a> {
    industries: Totals<'a>,
    countries: Totals<'a>,
    by_industry: BTreeMap<&'a str, Totals<'a>>,
}

impl<'a> Aggregator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows without a destination country only reach the industry total.
    pub fn add(&mut self, obs: &Observation<'a>) {
        self.industries.add(obs.activity, obs.value);
        let breakdown = self.by_industry.entry(obs.activity).or_default();
        if let Some(area) = obs.area {
            self.countries.add(area, obs.value);
            breakdown.add(area, obs.value);
        }
    }

    /// Industry totals, sorted, with display metadata.
    pub fn industries(&self) -> Vec<IndustryRecord> {
        self.industries
            .sorted()
            .into_iter()
            .map(|(code, value)| industry_record(code, value))
            .collect()
    }

    /// Per-industry country breakdowns in the order of
    /// [`Aggregator::industries`], followed by `_all`.
    pub fn by_industry(&self) -> ByIndustry {
        let mut by = ByIndustry::new();
        for (code, _) in self.industries.sorted() {
            let rows = self
                .by_industry
                .get(code)
                .map(country_records)
                .unwrap_or_default();
            by.insert(code, rows);
        }
        by.insert(ALL_INDUSTRIES_KEY, country_records(&self.countries));
        by
    }

    pub fn finish(self) -> OutputDocument {
        OutputDocument {
            industries: self.industries(),
            by_industry: self.by_industry(),
        }
    }
}

fn industry_record(code: &str, value: f64) -> IndustryRecord {
    let meta = industry_meta(code);
    IndustryRecord {
        code: code.to_string(),
        label: meta.label.to_string(),
        group: meta.group.to_string(),
        color: industry_color(&meta).to_string(),
        value,
    }
}

fn country_record(code: &str, value: f64) -> CountryRecord {
    let (region_key, region_label) = country_region(code);
    CountryRecord {
        country_code: code.to_string(),
        country_name: country_name(code),
        region_key,
        region_label: region_label.to_string(),
        color: region_key.color().to_string(),
        value,
    }
}

fn country_records(totals: &Totals<'_>) -> Vec<CountryRecord> {
    totals
        .sorted()
        .into_iter()
        .map(|(code, value)| country_record(code, value))
        .collect()
}

/// Build the output document from filtered observations.
pub fn aggregate<'r, 'a: 'r, I>(observations: I) -> OutputDocument
where
    I: IntoIterator<Item = &'r Observation<'a>>,
{
    let mut aggregator = Aggregator::new();
    for obs in observations {
        aggregator.add(obs);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegionKey;

    fn obs<'a>(area: &'a str, activity: &'a str, value: f64) -> Observation<'a> {
        Observation { area: Some(area), activity, value: Some(value) }
    }

    #[test]
    fn test_sums_per_industry() {
        let rows = vec![obs("DEU", "A", 100.0), obs("DEU", "A", 50.0), obs("FRA", "G", 70.0)];
        let doc = aggregate(&rows);

        assert_eq!(doc.industries.len(), 2);
        assert_eq!(doc.industries[0].code, "A");
        assert_eq!(doc.industries[0].value, 150.0);
        assert_eq!(doc.industries[0].color, "#DC9354");
        assert_eq!(doc.industries[1].code, "G");
        assert_eq!(doc.industries[1].label, "Veľkoobchod a maloobchod");
    }

    #[test]
    fn test_country_breakdowns() {
        let rows = vec![
            obs("DEU", "A", 10.0),
            obs("USA", "A", 30.0),
            obs("DEU", "G", 25.0),
        ];
        let doc = aggregate(&rows);

        let a = doc.by_industry.get("A").unwrap();
        assert_eq!(a[0].country_code, "USA");
        assert_eq!(a[0].region_key, RegionKey::Americas);
        assert_eq!(a[1].country_code, "DEU");

        let all = doc.by_industry.all().unwrap();
        assert_eq!(all[0].country_code, "DEU");
        assert_eq!(all[0].value, 35.0);
        assert_eq!(all[0].country_name, "Nemecko");
        assert_eq!(all[0].color, "#60A5FA");
        assert_eq!(all[1].value, 30.0);
    }

    #[test]
    fn test_key_order_follows_industries_then_all() {
        let rows = vec![obs("DEU", "A", 1.0), obs("DEU", "G", 5.0), obs("DEU", "B", 3.0)];
        let doc = aggregate(&rows);

        let keys: Vec<_> = doc.by_industry.keys().collect();
        assert_eq!(keys, vec!["G", "B", "A", "_all"]);
    }

    #[test]
    fn test_ties_broken_by_code() {
        let rows = vec![obs("FRA", "B", 5.0), obs("DEU", "A", 5.0)];
        let doc = aggregate(&rows);

        assert_eq!(doc.industries[0].code, "A");
        let all = doc.by_industry.all().unwrap();
        assert_eq!(all[0].country_code, "DEU");
    }

    #[test]
    fn test_missing_values_still_create_groups() {
        let rows = vec![Observation { area: Some("DEU"), activity: "A", value: None }];
        let doc = aggregate(&rows);

        assert_eq!(doc.industries[0].value, 0.0);
        assert_eq!(doc.by_industry.get("A").unwrap()[0].value, 0.0);
    }

    #[test]
    fn test_rows_without_country_count_towards_industry_only() {
        let rows = vec![
            obs("DEU", "A", 10.0),
            Observation { area: None, activity: "A", value: Some(5.0) },
        ];
        let doc = aggregate(&rows);

        assert_eq!(doc.industries[0].value, 15.0);
        let a = doc.by_industry.get("A").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].country_code, "DEU");
        assert_eq!(a[0].value, 10.0);
        assert_eq!(doc.by_industry.all().unwrap(), a);
    }

    #[test]
    fn test_industry_without_any_country_gets_empty_bucket() {
        let rows = vec![Observation { area: None, activity: "B", value: Some(2.0) }];
        let doc = aggregate(&rows);

        assert_eq!(doc.industries[0].code, "B");
        assert_eq!(doc.by_industry.get("B"), Some(&[][..]));
        assert!(doc.by_industry.all().unwrap().is_empty());
    }

    #[test]
    fn test_empty_input_has_all_key() {
        let doc = aggregate(&Vec::new());
        assert!(doc.industries.is_empty());
        assert_eq!(doc.by_industry.keys().collect::<Vec<_>>(), vec!["_all"]);
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        let rows = vec![obs("XKX", "ZZZ", 2.0)];
        let doc = aggregate(&rows);

        assert_eq!(doc.industries[0].group, "Iné");
        assert_eq!(doc.industries[0].color, "#9ca3af");
        let all = doc.by_industry.all().unwrap();
        assert_eq!(all[0].country_name, "XKX");
        assert_eq!(all[0].region_key, RegionKey::Other);
    }
}
