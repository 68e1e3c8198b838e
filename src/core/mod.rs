// src/core/mod.rs

pub mod net;
pub mod osm;
pub mod sanitize;

pub use net::{FeatureSource, OverpassClient};
pub use osm::{OsmFeature, TagFilter};
