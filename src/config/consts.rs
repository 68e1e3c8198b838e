// src/config/consts.rs

// Partition keys: the 21 LGAs of Kogi State, in scrape order
pub const LGAS: [&str; 21] = [
    "Adavi", "Ajaokuta", "Ankpa", "Bassa", "Dekina",
    "Ibaji", "Idah", "Igalamela-Odolu", "Ijumu", "Kabba/Bunu",
    "Kogi", "Lokoja", "Mopa-Muro", "Ofu", "Ogori/Magongo",
    "Okehi", "Okene", "Olamaboro", "Omala", "Yagba East", "Yagba West",
];
pub const STATE_NAME: &str = "Kogi";
pub const STATE_LABEL: &str = "Kogi State";

// Net config
pub const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const USER_AGENT: &str = concat!("kogi_pathfinder/", env!("CARGO_PKG_VERSION"));
pub const QUERY_TIMEOUT_S: u32 = 180;
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Files
pub const DEFAULT_OUT_DIR: &str = ".";
pub const SETTLEMENTS_FILE: &str = "kogi_villages_smart.csv";
pub const COMMERCIAL_FILE: &str = "kogi_commercial.csv";
pub const MASTER_FILE: &str = "kogi_master_leads.csv";
pub const REPORT_FILE: &str = "Kogi_Report.csv";

// Navigation
pub const MAPS_SEARCH_PREFIX: &str = "https://www.google.com/maps/search/?api=1&query=";
