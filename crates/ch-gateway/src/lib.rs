//! `ch-gateway`: the HTTP side of the simulation service.
//!
//! | Operation          | Request                                |
//! |--------------------|----------------------------------------|
//! | `get_map`          | `GET  /api/map?mapName=<name>`         |
//! | `get_map_config`   | `GET  /api/map-config?mapName=<name>`  |
//! | `post_game`        | `POST /api/game` (JSON `GameRequest`)  |
//!
//! Every request carries the credential in the `x-api-key` header.  Any
//! non-2xx status becomes [`GatewayError::Status`]; nothing is retried.

pub mod client;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use client::{HttpGateway, MapConfig};
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, ENV_API_KEY, GatewayConfig};
pub use error::{GatewayError, GatewayResult};
