use eyre::{bail, Result};
use serde::{Deserialize, Serialize};

use super::data::Bucket;
use super::state::{Boundary, RangeUpdate};

/// The user-adjustable `[min, max]` window. Invariant: `min < max`.
///
/// Owned by the host; a chart only ever proposes changes to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterRange {
    pub min: f64,
    pub max: f64,
}

impl FilterRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            bail!("filter range bounds must be finite (min={min}, max={max})");
        }
        if min >= max {
            bail!("filter range min must be strictly below max (min={min}, max={max})");
        }
        Ok(Self { min, max })
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    pub fn get(&self, boundary: Boundary) -> f64 {
        match boundary {
            Boundary::Min => self.min,
            Boundary::Max => self.max,
        }
    }

    /// Boundaries themselves belong to the in-range bucket.
    #[inline]
    pub fn classify(&self, value: f64) -> Bucket {
        if value < self.min {
            Bucket::BelowMin
        } else if value > self.max {
            Bucket::AboveMax
        } else {
            Bucket::InRange
        }
    }

    /// Range with the update applied, without checking the invariant.
    pub fn with_update(&self, update: RangeUpdate) -> Self {
        let mut next = *self;
        match update.boundary {
            Boundary::Min => next.min = update.value,
            Boundary::Max => next.max = update.value,
        }
        next
    }
}
