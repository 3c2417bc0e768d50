//! Aggregate counts used for startup logging and the `inspect` command.

use std::collections::BTreeMap;
use std::fmt;

use ch_core::ZoneId;

use crate::Snapshot;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneStations {
    pub standard: usize,
    pub green:    usize,
}

/// Persona distribution and per-zone station counts of one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub nodes:     usize,
    pub customers: usize,
    pub stations:  usize,
    pub personas:  BTreeMap<String, usize>,
    pub zones:     BTreeMap<ZoneId, ZoneStations>,
}

impl Snapshot {
    pub fn summary(&self) -> SnapshotSummary {
        let mut personas: BTreeMap<String, usize> = BTreeMap::new();
        for c in &self.customers {
            *personas.entry(c.persona.to_string()).or_default() += 1;
        }

        let mut zones: BTreeMap<ZoneId, ZoneStations> = self
            .zones
            .iter()
            .map(|z| (z.id.clone(), ZoneStations::default()))
            .collect();
        for s in &self.stations {
            let entry = zones.entry(s.zone.clone()).or_default();
            if s.is_green() {
                entry.green += 1;
            } else {
                entry.standard += 1;
            }
        }

        SnapshotSummary {
            nodes: self.zones.iter().map(|z| z.nodes.len()).sum(),
            customers: self.customers.len(),
            stations: self.stations.len(),
            personas,
            zones,
        }
    }
}

impl fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} stations, {} customers",
            self.nodes, self.stations, self.customers
        )?;
        for (persona, n) in &self.personas {
            write!(f, "; {persona}={n}")?;
        }
        Ok(())
    }
}
