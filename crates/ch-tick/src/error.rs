use std::error::Error;

use ch_core::{CoreError, Tick};
use thiserror::Error;

use crate::RunTotals;

#[derive(Debug, Error)]
pub enum TickError {
    #[error("invalid run configuration: {0}")]
    Core(#[from] CoreError),

    /// The gateway failed; the run stops here.  `last` holds the totals of
    /// the last successful submission.
    #[error("submission of {tick} failed (last score {})", .last.score)]
    Gateway {
        tick:   Tick,
        last:   RunTotals,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl TickError {
    /// Totals reported before the failure, if this is a transport error.
    pub fn last_totals(&self) -> Option<&RunTotals> {
        match self {
            TickError::Gateway { last, .. } => Some(last),
            TickError::Core(_)              => None,
        }
    }
}

pub type TickResult<T> = Result<T, TickError>;
