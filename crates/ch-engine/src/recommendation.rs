//! The unit of output of a recommendation pass.

use ch_core::{CustomerId, NodeId};

/// Route `customer` to `station` and charge it up to `charge_to`.
///
/// `charge_to` is a state-of-charge fraction in `[0, 1]`.  A pass emits at
/// most one recommendation per customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub customer:  CustomerId,
    pub station:   NodeId,
    pub charge_to: f64,
}

impl Recommendation {
    pub fn new(customer: CustomerId, station: NodeId, charge_to: f64) -> Self {
        Self { customer, station, charge_to: charge_to.clamp(0.0, 1.0) }
    }
}
