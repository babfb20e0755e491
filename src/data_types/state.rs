use serde::{Deserialize, Serialize};

/// One of the two draggable filter lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boundary {
    Min,
    Max,
}

/// Drag state of a single chart instance. Never outlives one drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    None,
    DraggingMin,
    DraggingMax,
}

impl SelectionState {
    pub fn dragging(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Min => Self::DraggingMin,
            Boundary::Max => Self::DraggingMax,
        }
    }

    /// The boundary being dragged, if any.
    pub fn boundary(&self) -> Option<Boundary> {
        match self {
            Self::None => None,
            Self::DraggingMin => Some(Boundary::Min),
            Self::DraggingMax => Some(Boundary::Max),
        }
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Which boundary gets the emphasis when the hover value is equidistant from both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    FavorMin,
    #[default]
    FavorMax,
}

/// Proposal from a chart to its host: move `boundary` to `value`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeUpdate {
    pub boundary: Boundary,
    pub value: f64,
}

impl RangeUpdate {
    pub fn min(value: f64) -> Self {
        Self {
            boundary: Boundary::Min,
            value,
        }
    }

    pub fn max(value: f64) -> Self {
        Self {
            boundary: Boundary::Max,
            value,
        }
    }
}
