// src/core/osm.rs
//
// Shapes of what comes back from the feature service, and the tag filters we
// send to it. Only points survive: nodes keep their own position, ways and
// relations are reduced to the center the service computes for them.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct OsmFeature {
    pub tags: BTreeMap<String, String>,
    pub lat: f64,
    pub lon: f64,
}

impl OsmFeature {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { tags: BTreeMap::new(), lat, lon }
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(s!(key), s!(value));
        self
    }

    /// Trimmed tag value; blank counts as absent.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tag(key).is_some()
    }
}

/// key → accepted values, OR-ed together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagFilter {
    pub rules: Vec<(&'static str, &'static [&'static str])>,
}

const PLACE_VALUES: &[&str] = &["village", "town", "hamlet", "suburb"];

const AMENITY_VALUES: &[&str] = &[
    "marketplace", "school", "college", "university", "bank", "fuel",
    "clinic", "hospital", "place_of_worship", "police", "townhall",
];
const OFFICE_VALUES: &[&str] = &["government", "association", "ngo", "cooperative"];
const SHOP_VALUES: &[&str] = &["supermarket", "wholesale", "mall", "general", "department_store"];
const TOURISM_VALUES: &[&str] = &["hotel", "guest_house"];
const INDUSTRIAL_VALUES: &[&str] = &["factory", "industrial_park", "sawmill"];

impl TagFilter {
    pub fn settlements() -> Self {
        Self { rules: vec![("place", PLACE_VALUES)] }
    }

    pub fn commercial() -> Self {
        Self {
            rules: vec![
                ("amenity", AMENITY_VALUES),
                ("office", OFFICE_VALUES),
                ("shop", SHOP_VALUES),
                ("tourism", TOURISM_VALUES),
                ("industrial", INDUSTRIAL_VALUES),
            ],
        }
    }
}

/* ---------------- Overpass wire format ---------------- */

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl Element {
    fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon, &self.center) {
            (Some(lat), Some(lon), _) => Some((lat, lon)),
            (_, _, Some(c)) => Some((c.lat, c.lon)),
            _ => None,
        }
    }
}

/// Turn a decoded response into features. A runtime remark with no elements
/// means the service gave up (timeout, memory), which we surface as an error.
pub fn features_from_response(resp: OverpassResponse) -> Result<Vec<OsmFeature>> {
    if resp.elements.is_empty() {
        if let Some(remark) = resp.remark.filter(|r| r.contains("error")) {
            return Err(Error::Query(remark));
        }
    }
    let mut out = Vec::with_capacity(resp.elements.len());
    for el in resp.elements {
        let Some((lat, lon)) = el.position() else {
            logd!("Overpass: {} without position skipped", el.kind);
            continue;
        };
        out.push(OsmFeature { tags: el.tags, lat, lon });
    }
    Ok(out)
}

/// Escape a value for use inside a double-quoted Overpass QL string.
pub fn ql_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Nigerian states are admin level 4, their LGAs level 6.
const STATE_ADMIN_LEVEL: u8 = 4;
const LGA_ADMIN_LEVEL: u8 = 6;

/// Overpass QL for every feature matching `filter` inside one LGA of the state.
/// The LGA relation is pinned to its admin level so an LGA sharing the
/// state's name ("Kogi") never resolves to the state itself.
pub fn build_query(state: &str, area: &str, filter: &TagFilter, timeout_s: u32) -> String {
    let mut q = format!("[out:json][timeout:{timeout_s}];\n");
    q.push_str(&format!(
        "area[\"boundary\"=\"administrative\"][\"admin_level\"=\"{STATE_ADMIN_LEVEL}\"][\"name\"~{}]->.state;\n",
        ql_quote(state)
    ));
    q.push_str(&format!(
        "rel(area.state)[\"boundary\"=\"administrative\"][\"admin_level\"=\"{LGA_ADMIN_LEVEL}\"][\"name\"={}];\nmap_to_area->.lga;\n(\n",
        ql_quote(area)
    ));
    for (key, values) in &filter.rules {
        let alternatives = values.join("|");
        q.push_str(&format!(
            "  nwr[{}~{}](area.lga);\n",
            ql_quote(key),
            ql_quote(&format!("^({alternatives})$"))
        ));
    }
    q.push_str(");\nout center tags;\n");
    q
}
