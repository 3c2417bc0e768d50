//! `HttpGateway`: blocking `reqwest` client for the simulation service.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use ch_snapshot::MapSnapshot;
use ch_tick::{GameRequest, Gateway, SimulationResult};

use crate::{GatewayConfig, GatewayError, GatewayResult};

const API_KEY_HEADER: &str = "x-api-key";

/// Map metadata served by `/api/map-config`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:     Option<String>,
    /// Run length in ticks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks:    Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cars: Option<u64>,
    /// Everything else the service sends, kept for inspection.
    #[serde(flatten)]
    pub other:    Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    api_key:  String,
    client:   Client,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(GatewayError::Config("base url must not be empty".into()));
        }
        if config.api_key.is_empty() {
            warn!(base_url, "no API key configured; requests are sent unauthenticated");
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms.max(1)))
            .build()?;

        Ok(Self {
            base_url: base_url.to_owned(),
            api_key:  config.api_key.clone(),
            client,
        })
    }

    /// Absolute URL of `path` (which starts with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn get_map(&self, map_name: &str) -> GatewayResult<MapSnapshot> {
        let body = self.get("/api/map", map_name)?;
        Ok(MapSnapshot::from_json(&body)?)
    }

    pub fn get_map_config(&self, map_name: &str) -> GatewayResult<MapConfig> {
        let body = self.get("/api/map-config", map_name)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn post_game(&self, request: &GameRequest) -> GatewayResult<SimulationResult> {
        let url = self.endpoint("/api/game");
        debug!(%url, ticks = request.ticks.len(), play_to_tick = ?request.play_to_tick, "posting game");
        let body = self.send(&url, self.client.post(&url).json(request))?;
        Ok(SimulationResult::from_json(&body)?)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn get(&self, path: &str, map_name: &str) -> GatewayResult<String> {
        let url = self.endpoint(path);
        debug!(%url, map_name, "fetching");
        self.send(&url, self.client.get(&url).query(&[("mapName", map_name)]))
    }

    /// Attach the credential, send, and return the body of a 2xx response.
    fn send(&self, url: &str, request: RequestBuilder) -> GatewayResult<String> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(GatewayError::Status { url: url.to_owned(), status: status.as_u16(), body });
        }
        Ok(body)
    }
}

impl Gateway for HttpGateway {
    type Error = GatewayError;

    fn submit(&mut self, request: &GameRequest) -> GatewayResult<SimulationResult> {
        self.post_game(request)
    }
}
