//! Geographic classification of destination countries.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::RegionKey;

const EUROPE: &[&str] = &[
    "AUT", "BEL", "BGR", "BLR", "CHE", "CYP", "CZE", "DEU", "DNK", "ESP", "EST", "FIN", "FRA",
    "GBR", "GRC", "HRV", "HUN", "IRL", "ISL", "ITA", "LTU", "LUX", "LVA", "MLT", "NLD", "NOR",
    "POL", "PRT", "ROU", "RUS", "SVK", "SVN", "SWE", "TUR", "UKR",
];

const AMERICAS: &[&str] = &["ARG", "BRA", "CAN", "CHL", "COL", "CRI", "MEX", "PER", "USA"];

const ASIA_PACIFIC: &[&str] = &[
    "AUS", "BGD", "BRN", "CHN", "HKG", "IDN", "IND", "JPN", "KAZ", "KHM", "KOR", "LAO", "MMR",
    "MYS", "NZL", "PAK", "PHL", "SGP", "THA", "TWN", "VNM",
];

const AFRICA_ME: &[&str] = &[
    "AGO", "ARE", "CIV", "CMR", "COD", "EGY", "ISR", "JOR", "MAR", "NGA", "SAU", "SEN", "STP",
    "TUN",
];

static REGION_INDEX: Lazy<HashMap<&'static str, RegionKey>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (codes, key) in [
        (EUROPE, RegionKey::Europe),
        (AMERICAS, RegionKey::Americas),
        (ASIA_PACIFIC, RegionKey::AsiaPacific),
        (AFRICA_ME, RegionKey::AfricaMe),
    ] {
        for code in codes {
            index.insert(*code, key);
        }
    }
    index
});

/// Region of an ISO3 country code. Total: unlisted codes are `Other`.
pub fn region_of(code: &str) -> RegionKey {
    REGION_INDEX.get(code).copied().unwrap_or(RegionKey::Other)
}

/// `(region key, region label)` of an ISO3 country code.
pub fn country_region(code: &str) -> (RegionKey, &'static str) {
    let key = region_of(code);
    (key, key.label())
}

/// Codes listed for a named region. Empty for `Other`.
pub fn region_members(key: RegionKey) -> &'static [&'static str] {
    match key {
        RegionKey::Europe => EUROPE,
        RegionKey::Americas => AMERICAS,
        RegionKey::AsiaPacific => ASIA_PACIFIC,
        RegionKey::AfricaMe => AFRICA_ME,
        RegionKey::Other => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_region() {
        assert_eq!(country_region("DEU"), (RegionKey::Europe, "Európa"));
        assert_eq!(country_region("USA"), (RegionKey::Americas, "Amerika"));
        assert_eq!(country_region("JPN"), (RegionKey::AsiaPacific, "Ázia a Pacifik"));
        assert_eq!(country_region("SAU"), (RegionKey::AfricaMe, "Afrika a Blízky východ"));
        assert_eq!(country_region("WXD"), (RegionKey::Other, "Ostatné krajiny"));
        assert_eq!(country_region(""), (RegionKey::Other, "Ostatné krajiny"));
    }

    #[test]
    fn test_regions_are_disjoint() {
        let listed: usize = RegionKey::ALL.iter().map(|k| region_members(*k).len()).sum();
        assert_eq!(REGION_INDEX.len(), listed);
    }

    #[test]
    fn test_every_member_maps_back_to_its_region() {
        for key in RegionKey::ALL {
            for code in region_members(key) {
                assert_eq!(region_of(code), key);
            }
        }
    }
}
