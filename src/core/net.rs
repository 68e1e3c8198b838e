// src/core/net.rs
//
// Blocking client for the Overpass API. One POST per LGA; no retries, the
// library's default timeouts apply.

use reqwest::blocking::Client;

use crate::config::consts::{QUERY_TIMEOUT_S, STATE_NAME, USER_AGENT};
use crate::error::Result;

use super::osm::{build_query, features_from_response, OsmFeature, OverpassResponse, TagFilter};

/// Anything that can answer "which features match this filter in this LGA".
/// The batch runner only talks to this trait.
pub trait FeatureSource {
    fn fetch(&self, area: &str, filter: &TagFilter) -> Result<Vec<OsmFeature>>;
}

pub struct OverpassClient {
    client: Client,
    endpoint: String,
}

impl OverpassClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, endpoint: s!(endpoint) })
    }
}

impl FeatureSource for OverpassClient {
    fn fetch(&self, area: &str, filter: &TagFilter) -> Result<Vec<OsmFeature>> {
        let query = build_query(STATE_NAME, area, filter, QUERY_TIMEOUT_S);
        logd!("Overpass: POST {} area={}", self.endpoint, area);

        let resp: OverpassResponse = self
            .client
            .post(&self.endpoint)
            .form(&[("data", query.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        features_from_response(resp)
    }
}
