use tracing::debug;

use crate::data_types::{FilterRange, RangeUpdate};

/// Owner of the authoritative [`FilterRange`].
///
/// Charts propose updates; the host decides. Several charts may be driven
/// against the same host, each with its own selection state.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterHost {
    range: FilterRange,
}

impl FilterHost {
    pub fn new(range: FilterRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> FilterRange {
        self.range
    }

    /// Applies a proposal. Rejects no-ops and anything that would break `min < max`.
    /// Returns whether the range changed.
    pub fn apply(&mut self, update: RangeUpdate) -> bool {
        if self.range.get(update.boundary) == update.value {
            return false;
        }
        let next = self.range.with_update(update);
        if !next.is_valid() {
            debug!(boundary = ?update.boundary, value = update.value, "rejecting range update");
            return false;
        }
        debug!(min = next.min, max = next.max, "range updated");
        self.range = next;
        true
    }

    /// Applies an optional proposal, as returned by hover handlers.
    pub fn apply_opt(&mut self, update: Option<RangeUpdate>) -> bool {
        update.is_some_and(|u| self.apply(u))
    }
}
