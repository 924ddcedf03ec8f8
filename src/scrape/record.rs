use serde::{Deserialize, Serialize};

pub const DIVISIONS_HEADER: [&str; 6] =
    ["ISO-3166-1", "ISO-3166-2", "Name1", "Name2", "Wikipedia", "Type"];
pub const SUBDIVISIONS_HEADER: [&str; 7] = [
    "ISO-3166-1",
    "ISO-3166-2",
    "ISO Region",
    "Name1",
    "Name2",
    "Wikipedia",
    "Type",
];
pub const NAMES_HEADER: [&str; 5] =
    ["ISO-3166-1", "ISO-3166-2", "language_code", "value", "wikipedia"];

/// One country row from the ISO 3166-2 index page. Countries whose type cell
/// is the em-dash placeholder never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryLink {
    pub country_code: String,
    pub href: String,
    pub division_type: String,
    pub subdivision_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionRecord {
    #[serde(rename = "ISO-3166-1")]
    pub country_code: String,
    /// Suffix of the ISO 3166-2 code, after the country prefix and hyphen.
    #[serde(rename = "ISO-3166-2")]
    pub division_code: String,
    #[serde(rename = "Name1")]
    pub name: String,
    #[serde(rename = "Name2")]
    pub display_name: String,
    #[serde(rename = "Wikipedia")]
    pub wikipedia_url: String,
    #[serde(rename = "Type")]
    pub division_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionRecord {
    #[serde(rename = "ISO-3166-1")]
    pub country_code: String,
    #[serde(rename = "ISO-3166-2")]
    pub subdivision_code: String,
    #[serde(rename = "ISO Region")]
    pub parent_code: String,
    #[serde(rename = "Name1")]
    pub name: String,
    #[serde(rename = "Name2")]
    pub display_name: String,
    #[serde(rename = "Wikipedia")]
    pub wikipedia_url: String,
    #[serde(rename = "Type")]
    pub subdivision_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTranslation {
    #[serde(rename = "ISO-3166-1")]
    pub country_code: String,
    #[serde(rename = "ISO-3166-2")]
    pub division_code: String,
    pub language_code: String,
    pub value: String,
    pub wikipedia: String,
}
