// src/rules/mod.rs
//! Pure classification rules applied to raw map features.
//!
//! Nothing in here touches the network or the filesystem: each function maps
//! tags (or a type string) to a value and is total over its input. The
//! collectors compose them; the merger reuses the naming fallback.

pub mod category;
pub mod estimate;
pub mod naming;
pub mod priority;

pub use category::{categorize, facility_type};
pub use estimate::{estimate_bucket, estimate_population, estimate_traffic, Bucket, Estimate, Estimator};
pub use naming::{resolve_commercial_name, resolve_settlement_name, ResolvedName};
pub use priority::{lead_priority, parse_confirmed_population, settlement_priority, PopulationSignal};
