// src/config/profiles.rs
//
// Static reference table for the LGAs: official population, viability tier
// and a one-line description. Parsed once at startup and handed around
// read-only; nothing mutates it afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

const EMBEDDED: &str = include_str!("profiles.toml");

pub const UNKNOWN_TIER: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LgaProfile {
    pub name: String,
    pub population: u64,
    pub tier: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
struct ProfilesFile {
    lga: Vec<LgaProfile>,
}

#[derive(Clone, Debug)]
pub struct LgaProfiles {
    by_name: HashMap<String, LgaProfile>,
    fallback: LgaProfile,
}

impl LgaProfiles {
    /// The table shipped with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED)
    }

    /// A user-supplied table with the same `[[lga]]` layout.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: ProfilesFile = toml::from_str(text)?;
        let mut by_name = HashMap::with_capacity(file.lga.len());
        for p in file.lga {
            if by_name.contains_key(&p.name) {
                return Err(Error::Config(format!("duplicate LGA profile: {}", p.name)));
            }
            by_name.insert(p.name.clone(), p);
        }
        Ok(Self {
            by_name,
            fallback: LgaProfile {
                name: s!(),
                population: 0,
                tier: s!(UNKNOWN_TIER),
                description: s!(),
            },
        })
    }

    /// Exact-name lookup; unmatched areas get population 0, tier "Unknown", empty description.
    pub fn lookup(&self, area: &str) -> &LgaProfile {
        self.by_name.get(area).unwrap_or(&self.fallback)
    }

    pub fn contains(&self, area: &str) -> bool {
        self.by_name.contains_key(area)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Largest population in the table (progress-bar ceiling for the matrix view).
    pub fn max_population(&self) -> u64 {
        self.by_name.values().map(|p| p.population).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::LGAS;

    #[test]
    fn embedded_table_covers_every_lga() {
        let t = LgaProfiles::embedded().unwrap();
        assert_eq!(t.len(), 21);
        for lga in LGAS {
            assert!(t.contains(lga), "missing profile for {lga}");
        }
        assert_eq!(t.lookup("Okene").population, 420_000);
        assert_eq!(t.max_population(), 420_000);
    }

    #[test]
    fn unknown_area_defaults() {
        let t = LgaProfiles::embedded().unwrap();
        let p = t.lookup("Atlantis");
        assert_eq!(p.population, 0);
        assert_eq!(p.tier, "Unknown");
        assert_eq!(p.description, "");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let doc = r#"
            [[lga]]
            name = "Idah"
            population = 1
            tier = "T"

            [[lga]]
            name = "Idah"
            population = 2
            tier = "T"
        "#;
        assert!(matches!(LgaProfiles::from_toml(doc), Err(Error::Config(_))));
    }
}
