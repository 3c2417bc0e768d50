//! The seam between the controller and the simulation service.

use std::error::Error;

use crate::{GameRequest, SimulationResult};

/// Synchronous request/response access to the simulation service.
///
/// The controller treats every `Err` as fatal: there is no retry or backoff
/// at this layer.  Implementations: `ch_gateway::HttpGateway` for the real
/// service, scripted in-memory gateways in tests.
pub trait Gateway {
    type Error: Error + Send + Sync + 'static;

    fn submit(&mut self, request: &GameRequest) -> Result<SimulationResult, Self::Error>;
}

impl<G: Gateway + ?Sized> Gateway for &mut G {
    type Error = G::Error;

    fn submit(&mut self, request: &GameRequest) -> Result<SimulationResult, Self::Error> {
        (**self).submit(request)
    }
}
