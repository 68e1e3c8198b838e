// src/model.rs
//
// Row shapes of the three data files. Column names are part of the file
// contract, so every field carries its on-disk header.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Settlement,
    Business,
    Religious,
    Education,
    Hospitality,
    #[serde(rename = "Office/Govt")]
    OfficeGovt,
    Industrial,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Settlement,
        Category::Business,
        Category::Religious,
        Category::Education,
        Category::Hospitality,
        Category::OfficeGovt,
        Category::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Settlement  => "Settlement",
            Category::Business    => "Business",
            Category::Religious   => "Religious",
            Category::Education   => "Education",
            Category::Hospitality => "Hospitality",
            Category::OfficeGovt  => "Office/Govt",
            Category::Industrial  => "Industrial",
        }
    }

    /// Exact label match (case-insensitive, trimmed).
    pub fn parse(s: &str) -> Option<Category> {
        let s = s.trim();
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(s))
    }

    pub fn is_settlement(&self) -> bool {
        matches!(self, Category::Settlement)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the settlement file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettlementRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "LGA")]
    pub lga: String,
    #[serde(rename = "Population_Info")]
    pub population_info: String,
    #[serde(rename = "Priority_Tier")]
    pub priority: u8,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// One row of the commercial file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommercialRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "LGA")]
    pub lga: String,
    #[serde(rename = "Tentative_Population")]
    pub tentative_population: String,
    #[serde(rename = "Priority_Tier")]
    pub priority: u8,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// One row of the master lead list. `navigation_link` is derived from the
/// coordinates (see `merge::navigation_link`) and never set by hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MasterRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "LGA")]
    pub lga: String,
    #[serde(rename = "Tentative_Population")]
    pub tentative_population: String,
    #[serde(rename = "Priority_Tier")]
    pub priority: u8,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Navigation_Link")]
    pub navigation_link: String,
}

pub const SETTLEMENT_HEADERS: [&str; 7] = [
    "Name", "Type", "LGA", "Population_Info", "Priority_Tier", "Latitude", "Longitude",
];

pub const COMMERCIAL_HEADERS: [&str; 8] = [
    "Name", "Type", "Category", "LGA", "Tentative_Population", "Priority_Tier", "Latitude", "Longitude",
];

pub const MASTER_HEADERS: [&str; 9] = [
    "Name", "Category", "Type", "LGA", "Tentative_Population", "Priority_Tier",
    "Latitude", "Longitude", "Navigation_Link",
];
