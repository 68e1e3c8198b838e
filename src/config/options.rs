// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub collect: CollectOptions,
    pub merge: MergeOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::in_dir(Path::new(DEFAULT_OUT_DIR))
    }
}

impl AppOptions {
    /// All stage files rooted at `dir`, everything else default.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            collect: CollectOptions::default(),
            merge: MergeOptions::in_dir(dir),
            export: ExportOptions::in_dir(dir),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AreaSelector {
    All,
    Names(Vec<String>),
}

impl AreaSelector {
    /// Resolve to the ordered list of LGAs. Unknown names are dropped;
    /// the set of areas is closed.
    pub fn resolve(&self) -> Vec<&'static str> {
        match self {
            AreaSelector::All => LGAS.to_vec(),
            AreaSelector::Names(names) => LGAS
                .iter()
                .copied()
                .filter(|lga| names.iter().any(|n| n.trim().eq_ignore_ascii_case(lga)))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub endpoint: String,
    pub areas: AreaSelector,
    pub pause: Duration,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(OVERPASS_URL),
            areas: AreaSelector::All,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOptions {
    pub settlements: PathBuf,
    pub commercial: PathBuf,
    pub master: PathBuf,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self::in_dir(Path::new(DEFAULT_OUT_DIR))
    }
}

impl MergeOptions {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            settlements: dir.join(SETTLEMENTS_FILE),
            commercial: dir.join(COMMERCIAL_FILE),
            master: dir.join(MASTER_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::in_dir(Path::new(DEFAULT_OUT_DIR))
    }
}

impl ExportOptions {
    pub fn in_dir(dir: &Path) -> Self {
        Self { out_path: dir.join(REPORT_FILE), include_headers: true }
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Parse GUI text into a report path. A bare directory gets the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = PathBuf::from(s);
        self.out_path = if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            p.join(REPORT_FILE)
        } else {
            p
        };
    }
}
