//! IBAN country registry.
//!
//! Maps each participating country's ISO 3166-1 alpha-2 code to its
//! display name and fixed IBAN length. The registry is an embedded
//! constant dataset; there is no runtime reconfiguration.

use serde::Serialize;

/// Per-country IBAN metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryData {
    /// English display name.
    pub name: &'static str,
    /// Total IBAN length for this country, country code and check
    /// digits included.
    pub iban_length: usize,
}

/// Look up the IBAN metadata for a 2-letter country code.
///
/// Lookup is case-insensitive; anything that is not a known code
/// (including the empty string) returns `None`.
pub fn country_data(code: &str) -> Option<&'static CountryData> {
    let upper = code.to_ascii_uppercase();
    COUNTRIES
        .binary_search_by_key(&upper.as_str(), |&(c, _)| c)
        .ok()
        .map(|i| &COUNTRIES[i].1)
}

/// Check whether `code` is a known IBAN country code (case-insensitive).
pub fn is_known_country_code(code: &str) -> bool {
    country_data(code).is_some()
}

/// The full country registry, sorted by country code.
pub fn countries() -> &'static [(&'static str, CountryData)] {
    COUNTRIES
}

/// IBAN-participating countries (69 entries). Sorted for binary search.
static COUNTRIES: &[(&str, CountryData)] = &[
    ("AD", CountryData { name: "Andorra", iban_length: 24 }),
    ("AE", CountryData { name: "United Arab Emirates", iban_length: 23 }),
    ("AL", CountryData { name: "Albania", iban_length: 28 }),
    ("AT", CountryData { name: "Austria", iban_length: 20 }),
    ("AZ", CountryData { name: "Azerbaijan", iban_length: 28 }),
    ("BA", CountryData { name: "Bosnia and Herzegovina", iban_length: 20 }),
    ("BE", CountryData { name: "Belgium", iban_length: 16 }),
    ("BG", CountryData { name: "Bulgaria", iban_length: 22 }),
    ("BH", CountryData { name: "Bahrain", iban_length: 22 }),
    ("BR", CountryData { name: "Brazil", iban_length: 29 }),
    ("BY", CountryData { name: "Belarus", iban_length: 28 }),
    ("CH", CountryData { name: "Switzerland", iban_length: 21 }),
    ("CR", CountryData { name: "Costa Rica", iban_length: 22 }),
    ("CY", CountryData { name: "Cyprus", iban_length: 28 }),
    ("CZ", CountryData { name: "Czech Republic", iban_length: 24 }),
    ("DE", CountryData { name: "Germany", iban_length: 22 }),
    ("DK", CountryData { name: "Denmark", iban_length: 18 }),
    ("DO", CountryData { name: "Dominican Republic", iban_length: 28 }),
    ("EE", CountryData { name: "Estonia", iban_length: 20 }),
    ("ES", CountryData { name: "Spain", iban_length: 24 }),
    ("FI", CountryData { name: "Finland", iban_length: 18 }),
    ("FO", CountryData { name: "Faroe Islands", iban_length: 18 }),
    ("FR", CountryData { name: "France", iban_length: 27 }),
    ("GB", CountryData { name: "United Kingdom", iban_length: 22 }),
    ("GE", CountryData { name: "Georgia", iban_length: 22 }),
    ("GI", CountryData { name: "Gibraltar", iban_length: 23 }),
    ("GL", CountryData { name: "Greenland", iban_length: 18 }),
    ("GR", CountryData { name: "Greece", iban_length: 27 }),
    ("GT", CountryData { name: "Guatemala", iban_length: 28 }),
    ("HR", CountryData { name: "Croatia", iban_length: 21 }),
    ("HU", CountryData { name: "Hungary", iban_length: 28 }),
    ("IE", CountryData { name: "Ireland", iban_length: 22 }),
    ("IL", CountryData { name: "Israel", iban_length: 23 }),
    ("IS", CountryData { name: "Iceland", iban_length: 26 }),
    ("IT", CountryData { name: "Italy", iban_length: 27 }),
    ("JO", CountryData { name: "Jordan", iban_length: 30 }),
    ("KW", CountryData { name: "Kuwait", iban_length: 30 }),
    ("KZ", CountryData { name: "Kazakhstan", iban_length: 20 }),
    ("LB", CountryData { name: "Lebanon", iban_length: 28 }),
    ("LI", CountryData { name: "Liechtenstein", iban_length: 21 }),
    ("LT", CountryData { name: "Lithuania", iban_length: 20 }),
    ("LU", CountryData { name: "Luxembourg", iban_length: 20 }),
    ("LV", CountryData { name: "Latvia", iban_length: 21 }),
    ("MC", CountryData { name: "Monaco", iban_length: 27 }),
    ("MD", CountryData { name: "Moldova", iban_length: 24 }),
    ("ME", CountryData { name: "Montenegro", iban_length: 22 }),
    ("MK", CountryData { name: "North Macedonia", iban_length: 19 }),
    ("MR", CountryData { name: "Mauritania", iban_length: 27 }),
    ("MT", CountryData { name: "Malta", iban_length: 31 }),
    ("MU", CountryData { name: "Mauritius", iban_length: 30 }),
    ("NL", CountryData { name: "Netherlands", iban_length: 18 }),
    ("NO", CountryData { name: "Norway", iban_length: 15 }),
    ("PK", CountryData { name: "Pakistan", iban_length: 24 }),
    ("PL", CountryData { name: "Poland", iban_length: 28 }),
    ("PS", CountryData { name: "Palestine", iban_length: 29 }),
    ("PT", CountryData { name: "Portugal", iban_length: 25 }),
    ("QA", CountryData { name: "Qatar", iban_length: 29 }),
    ("RO", CountryData { name: "Romania", iban_length: 24 }),
    ("RS", CountryData { name: "Serbia", iban_length: 22 }),
    ("SA", CountryData { name: "Saudi Arabia", iban_length: 24 }),
    ("SE", CountryData { name: "Sweden", iban_length: 24 }),
    ("SI", CountryData { name: "Slovenia", iban_length: 19 }),
    ("SK", CountryData { name: "Slovakia", iban_length: 24 }),
    ("SM", CountryData { name: "San Marino", iban_length: 27 }),
    ("TL", CountryData { name: "East Timor", iban_length: 23 }),
    ("TN", CountryData { name: "Tunisia", iban_length: 24 }),
    ("TR", CountryData { name: "Turkey", iban_length: 26 }),
    ("VG", CountryData { name: "Virgin Islands, British", iban_length: 24 }),
    ("XK", CountryData { name: "Kosovo", iban_length: 20 }),
];
