//! Country display names.
//!
//! Lookup order: the curated Slovak names, then the ISO 3166-1 English
//! short names, then the raw code.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Curated Slovak names of the economies present in TiVA.
const SLOVAK_NAMES: &[(&str, &str)] = &[
    // Afrika a Blízky východ
    ("AGO", "Angola"),
    ("ARE", "Spojené arabské emiráty"),
    ("CIV", "Pobrežie Slonoviny"),
    ("CMR", "Kamerun"),
    ("COD", "Konžská dem. republika"),
    ("EGY", "Egypt"),
    ("ISR", "Izrael"),
    ("JOR", "Jordánsko"),
    ("MAR", "Maroko"),
    ("NGA", "Nigéria"),
    ("SAU", "Saudská Arábia"),
    ("SEN", "Senegal"),
    ("STP", "Svätý Tomáš a Princov ostrov"),
    ("TUN", "Tunisko"),
    // Európa
    ("AUT", "Rakúsko"),
    ("BEL", "Belgicko"),
    ("BGR", "Bulharsko"),
    ("BLR", "Bielorusko"),
    ("CHE", "Švajčiarsko"),
    ("CYP", "Cyprus"),
    ("CZE", "Česko"),
    ("DEU", "Nemecko"),
    ("DNK", "Dánsko"),
    ("ESP", "Španielsko"),
    ("EST", "Estónsko"),
    ("FIN", "Fínsko"),
    ("FRA", "Francúzsko"),
    ("GBR", "Spojené kráľovstvo"),
    ("GRC", "Grécko"),
    ("HRV", "Chorvátsko"),
    ("HUN", "Maďarsko"),
    ("IRL", "Írsko"),
    ("ISL", "Island"),
    ("ITA", "Taliansko"),
    ("LTU", "Litva"),
    ("LUX", "Luxembursko"),
    ("LVA", "Lotyšsko"),
    ("MLT", "Malta"),
    ("NLD", "Holandsko"),
    ("NOR", "Nórsko"),
    ("POL", "Poľsko"),
    ("PRT", "Portugalsko"),
    ("ROU", "Rumunsko"),
    ("RUS", "Rusko"),
    ("SVK", "Slovensko"),
    ("SVN", "Slovinsko"),
    ("SWE", "Švédsko"),
    ("TUR", "Turecko"),
    ("UKR", "Ukrajina"),
    // Amerika
    ("ARG", "Argentína"),
    ("BRA", "Brazília"),
    ("CAN", "Kanada"),
    ("CHL", "Čile"),
    ("COL", "Kolumbia"),
    ("CRI", "Kostarika"),
    ("MEX", "Mexiko"),
    ("PER", "Peru"),
    ("USA", "Spojené štáty"),
    // Ázia a Pacifik
    ("AUS", "Austrália"),
    ("BGD", "Bangladéš"),
    ("BRN", "Brunej"),
    ("CHN", "Čína"),
    ("HKG", "Hongkong"),
    ("IDN", "Indonézia"),
    ("IND", "India"),
    ("JPN", "Japonsko"),
    ("KAZ", "Kazachstan"),
    ("KHM", "Kambodža"),
    ("KOR", "Kórejská republika"),
    ("LAO", "Laos"),
    ("MMR", "Mjanmarsko"),
    ("MYS", "Malajzia"),
    ("NZL", "Nový Zéland"),
    ("PAK", "Pakistan"),
    ("PHL", "Filipíny"),
    ("SGP", "Singapur"),
    ("THA", "Thajsko"),
    ("TWN", "Taiwan"),
    ("VNM", "Vietnam"),
    // Zvyšok sveta
    ("WXD", "Zvyšok sveta"),
];

/// ISO 3166-1 alpha-3 codes with English short names, sorted by code.
const ISO_3166_NAMES: &[(&str, &str)] = &[
    ("ABW", "Aruba"),
    ("AFG", "Afghanistan"),
    ("AGO", "Angola"),
    ("AIA", "Anguilla"),
    ("ALA", "Åland Islands"),
    ("ALB", "Albania"),
    ("AND", "Andorra"),
    ("ARE", "United Arab Emirates"),
    ("ARG", "Argentina"),
    ("ARM", "Armenia"),
    ("ASM", "American Samoa"),
    ("ATA", "Antarctica"),
    ("ATF", "French Southern Territories"),
    ("ATG", "Antigua and Barbuda"),
    ("AUS", "Australia"),
    ("AUT", "Austria"),
    ("AZE", "Azerbaijan"),
    ("BDI", "Burundi"),
    ("BEL", "Belgium"),
    ("BEN", "Benin"),
    ("BES", "Bonaire, Sint Eustatius and Saba"),
    ("BFA", "Burkina Faso"),
    ("BGD", "Bangladesh"),
    ("BGR", "Bulgaria"),
    ("BHR", "Bahrain"),
    ("BHS", "Bahamas"),
    ("BIH", "Bosnia and Herzegovina"),
    ("BLM", "Saint Barthélemy"),
    ("BLR", "Belarus"),
    ("BLZ", "Belize"),
    ("BMU", "Bermuda"),
    ("BOL", "Bolivia, Plurinational State of"),
    ("BRA", "Brazil"),
    ("BRB", "Barbados"),
    ("BRN", "Brunei Darussalam"),
    ("BTN", "Bhutan"),
    ("BVT", "Bouvet Island"),
    ("BWA", "Botswana"),
    ("CAF", "Central African Republic"),
    ("CAN", "Canada"),
    ("CCK", "Cocos (Keeling) Islands"),
    ("CHE", "Switzerland"),
    ("CHL", "Chile"),
    ("CHN", "China"),
    ("CIV", "Côte d'Ivoire"),
    ("CMR", "Cameroon"),
    ("COD", "Congo, The Democratic Republic of the"),
    ("COG", "Congo"),
    ("COK", "Cook Islands"),
    ("COL", "Colombia"),
    ("COM", "Comoros"),
    ("CPV", "Cabo Verde"),
    ("CRI", "Costa Rica"),
    ("CUB", "Cuba"),
    ("CUW", "Curaçao"),
    ("CXR", "Christmas Island"),
    ("CYM", "Cayman Islands"),
    ("CYP", "Cyprus"),
    ("CZE", "Czechia"),
    ("DEU", "Germany"),
    ("DJI", "Djibouti"),
    ("DMA", "Dominica"),
    ("DNK", "Denmark"),
    ("DOM", "Dominican Republic"),
    ("DZA", "Algeria"),
    ("ECU", "Ecuador"),
    ("EGY", "Egypt"),
    ("ERI", "Eritrea"),
    ("ESH", "Western Sahara"),
    ("ESP", "Spain"),
    ("EST", "Estonia"),
    ("ETH", "Ethiopia"),
    ("FIN", "Finland"),
    ("FJI", "Fiji"),
    ("FLK", "Falkland Islands (Malvinas)"),
    ("FRA", "France"),
    ("FRO", "Faroe Islands"),
    ("FSM", "Micronesia, Federated States of"),
    ("GAB", "Gabon"),
    ("GBR", "United Kingdom"),
    ("GEO", "Georgia"),
    ("GGY", "Guernsey"),
    ("GHA", "Ghana"),
    ("GIB", "Gibraltar"),
    ("GIN", "Guinea"),
    ("GLP", "Guadeloupe"),
    ("GMB", "Gambia"),
    ("GNB", "Guinea-Bissau"),
    ("GNQ", "Equatorial Guinea"),
    ("GRC", "Greece"),
    ("GRD", "Grenada"),
    ("GRL", "Greenland"),
    ("GTM", "Guatemala"),
    ("GUF", "French Guiana"),
    ("GUM", "Guam"),
    ("GUY", "Guyana"),
    ("HKG", "Hong Kong"),
    ("HMD", "Heard Island and McDonald Islands"),
    ("HND", "Honduras"),
    ("HRV", "Croatia"),
    ("HTI", "Haiti"),
    ("HUN", "Hungary"),
    ("IDN", "Indonesia"),
    ("IMN", "Isle of Man"),
    ("IND", "India"),
    ("IOT", "British Indian Ocean Territory"),
    ("IRL", "Ireland"),
    ("IRN", "Iran, Islamic Republic of"),
    ("IRQ", "Iraq"),
    ("ISL", "Iceland"),
    ("ISR", "Israel"),
    ("ITA", "Italy"),
    ("JAM", "Jamaica"),
    ("JEY", "Jersey"),
    ("JOR", "Jordan"),
    ("JPN", "Japan"),
    ("KAZ", "Kazakhstan"),
    ("KEN", "Kenya"),
    ("KGZ", "Kyrgyzstan"),
    ("KHM", "Cambodia"),
    ("KIR", "Kiribati"),
    ("KNA", "Saint Kitts and Nevis"),
    ("KOR", "Korea, Republic of"),
    ("KWT", "Kuwait"),
    ("LAO", "Lao People's Democratic Republic"),
    ("LBN", "Lebanon"),
    ("LBR", "Liberia"),
    ("LBY", "Libya"),
    ("LCA", "Saint Lucia"),
    ("LIE", "Liechtenstein"),
    ("LKA", "Sri Lanka"),
    ("LSO", "Lesotho"),
    ("LTU", "Lithuania"),
    ("LUX", "Luxembourg"),
    ("LVA", "Latvia"),
    ("MAC", "Macao"),
    ("MAF", "Saint Martin (French part)"),
    ("MAR", "Morocco"),
    ("MCO", "Monaco"),
    ("MDA", "Moldova, Republic of"),
    ("MDG", "Madagascar"),
    ("MDV", "Maldives"),
    ("MEX", "Mexico"),
    ("MHL", "Marshall Islands"),
    ("MKD", "North Macedonia"),
    ("MLI", "Mali"),
    ("MLT", "Malta"),
    ("MMR", "Myanmar"),
    ("MNE", "Montenegro"),
    ("MNG", "Mongolia"),
    ("MNP", "Northern Mariana Islands"),
    ("MOZ", "Mozambique"),
    ("MRT", "Mauritania"),
    ("MSR", "Montserrat"),
    ("MTQ", "Martinique"),
    ("MUS", "Mauritius"),
    ("MWI", "Malawi"),
    ("MYS", "Malaysia"),
    ("MYT", "Mayotte"),
    ("NAM", "Namibia"),
    ("NCL", "New Caledonia"),
    ("NER", "Niger"),
    ("NFK", "Norfolk Island"),
    ("NGA", "Nigeria"),
    ("NIC", "Nicaragua"),
    ("NIU", "Niue"),
    ("NLD", "Netherlands"),
    ("NOR", "Norway"),
    ("NPL", "Nepal"),
    ("NRU", "Nauru"),
    ("NZL", "New Zealand"),
    ("OMN", "Oman"),
    ("PAK", "Pakistan"),
    ("PAN", "Panama"),
    ("PCN", "Pitcairn"),
    ("PER", "Peru"),
    ("PHL", "Philippines"),
    ("PLW", "Palau"),
    ("PNG", "Papua New Guinea"),
    ("POL", "Poland"),
    ("PRI", "Puerto Rico"),
    ("PRK", "Korea, Democratic People's Republic of"),
    ("PRT", "Portugal"),
    ("PRY", "Paraguay"),
    ("PSE", "Palestine, State of"),
    ("PYF", "French Polynesia"),
    ("QAT", "Qatar"),
    ("REU", "Réunion"),
    ("ROU", "Romania"),
    ("RUS", "Russian Federation"),
    ("RWA", "Rwanda"),
    ("SAU", "Saudi Arabia"),
    ("SDN", "Sudan"),
    ("SEN", "Senegal"),
    ("SGP", "Singapore"),
    ("SGS", "South Georgia and the South Sandwich Islands"),
    ("SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    ("SJM", "Svalbard and Jan Mayen"),
    ("SLB", "Solomon Islands"),
    ("SLE", "Sierra Leone"),
    ("SLV", "El Salvador"),
    ("SMR", "San Marino"),
    ("SOM", "Somalia"),
    ("SPM", "Saint Pierre and Miquelon"),
    ("SRB", "Serbia"),
    ("SSD", "South Sudan"),
    ("STP", "Sao Tome and Principe"),
    ("SUR", "Suriname"),
    ("SVK", "Slovakia"),
    ("SVN", "Slovenia"),
    ("SWE", "Sweden"),
    ("SWZ", "Eswatini"),
    ("SXM", "Sint Maarten (Dutch part)"),
    ("SYC", "Seychelles"),
    ("SYR", "Syrian Arab Republic"),
    ("TCA", "Turks and Caicos Islands"),
    ("TCD", "Chad"),
    ("TGO", "Togo"),
    ("THA", "Thailand"),
    ("TJK", "Tajikistan"),
    ("TKL", "Tokelau"),
    ("TKM", "Turkmenistan"),
    ("TLS", "Timor-Leste"),
    ("TON", "Tonga"),
    ("TTO", "Trinidad and Tobago"),
    ("TUN", "Tunisia"),
    ("TUR", "Türkiye"),
    ("TUV", "Tuvalu"),
    ("TWN", "Taiwan, Province of China"),
    ("TZA", "Tanzania, United Republic of"),
    ("UGA", "Uganda"),
    ("UKR", "Ukraine"),
    ("UMI", "United States Minor Outlying Islands"),
    ("URY", "Uruguay"),
    ("USA", "United States"),
    ("UZB", "Uzbekistan"),
    ("VAT", "Holy See (Vatican City State)"),
    ("VCT", "Saint Vincent and the Grenadines"),
    ("VEN", "Venezuela, Bolivarian Republic of"),
    ("VGB", "Virgin Islands, British"),
    ("VIR", "Virgin Islands, U.S."),
    ("VNM", "Viet Nam"),
    ("VUT", "Vanuatu"),
    ("WLF", "Wallis and Futuna"),
    ("WSM", "Samoa"),
    ("YEM", "Yemen"),
    ("ZAF", "South Africa"),
    ("ZMB", "Zambia"),
    ("ZWE", "Zimbabwe"),
];

static SLOVAK_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SLOVAK_NAMES.iter().copied().collect());

/// Curated Slovak name, if the code has one.
pub fn slovak_name(code: &str) -> Option<&'static str> {
    SLOVAK_INDEX.get(code).copied()
}

/// ISO 3166-1 English short name. Case-insensitive on the code.
pub fn iso_name(code: &str) -> Option<&'static str> {
    let code = code.to_ascii_uppercase();
    ISO_3166_NAMES
        .binary_search_by(|(c, _)| (*c).cmp(code.as_str()))
        .ok()
        .map(|i| ISO_3166_NAMES[i].1)
}

/// Display name for an ISO3 code, falling back to the code itself.
pub fn country_name(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    slovak_name(code)
        .or_else(|| iso_name(code))
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_name_wins() {
        assert_eq!(country_name("DEU"), "Nemecko");
        assert_eq!(country_name("WXD"), "Zvyšok sveta");
    }

    #[test]
    fn test_iso_fallback() {
        assert_eq!(country_name("ZAF"), "South Africa");
        assert_eq!(country_name("nga"), "Nigeria");
        assert_eq!(iso_name("kor"), Some("Korea, Republic of"));
    }

    #[test]
    fn test_raw_code_fallback() {
        assert_eq!(country_name("EU27"), "EU27");
        assert_eq!(country_name(""), "");
    }

    #[test]
    fn test_iso_table_sorted_and_unique() {
        assert!(ISO_3166_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_curated_codes_unique() {
        assert_eq!(SLOVAK_INDEX.len(), SLOVAK_NAMES.len());
    }
}
