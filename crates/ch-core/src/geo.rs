//! Planar coordinates and weighted Euclidean distance.
//!
//! The simulation service encodes a node's grid position in its identifier
//! (`"3,7"`, `"3_7"`, …).  Parsing is lenient: anything that is not exactly two
//! finite numbers yields `None`, and distance queries involving an
//! unresolved location return [`UNRESOLVED_DISTANCE`] so the offending
//! station or customer sorts last instead of aborting the tick.

/// Distance reported when either endpoint has no parseable coordinates.
///
/// Large but finite, so a load-weighted term added on top still orders
/// unresolved stations among themselves.
pub const UNRESOLVED_DISTANCE: f64 = 1.0e9;

/// Separators accepted between the two components of a location id.
const SEPARATORS: &[char] = &[',', '_', ':', ';'];

/// A 2-D grid coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse a two-component location identifier.
    ///
    /// Returns `None` for missing components, extra components, or
    /// non-finite numbers.
    pub fn parse(id: &str) -> Option<Coord> {
        let mut parts = id.trim().split(SEPARATORS);
        let x = parts.next()?.trim().parse::<f64>().ok()?;
        let y = parts.next()?.trim().parse::<f64>().ok()?;
        if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Coord { x, y })
    }

    /// Euclidean distance with the y axis scaled by `axis_weight`.
    ///
    /// `axis_weight = 1.0` is plain Euclidean distance.  Some maps stretch
    /// one axis (e.g. rows twice as far apart as columns).
    #[inline]
    pub fn distance(self, other: Coord, axis_weight: f64) -> f64 {
        let dx = other.x - self.x;
        let dy = (other.y - self.y) * axis_weight;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance between two optional locations, falling back to
    /// [`UNRESOLVED_DISTANCE`] when either is unknown.
    #[inline]
    pub fn distance_or_sentinel(a: Option<Coord>, b: Option<Coord>, axis_weight: f64) -> f64 {
        match (a, b) {
            (Some(a), Some(b)) => a.distance(b, axis_weight),
            _ => UNRESOLVED_DISTANCE,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
