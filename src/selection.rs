//! Drag-selection state machine for the two filter lines.
//!
//! States are `None`, `DraggingMin` and `DraggingMax`. Pointer-down on a line
//! starts a drag (only in edit mode), pointer-up or leaving the chart ends it.
//! While dragging, each hover value may produce a [`RangeUpdate`] proposal for
//! the host; the controller never owns or mutates the range itself.

use tracing::{debug, trace};

use crate::data_types::{Boundary, FilterRange, RangeUpdate, SelectionState, TieBreak};
use crate::view_controller::ViewController;

#[derive(Clone, Debug, Default)]
pub struct DragSelectionController {
    edit_mode: bool,
    selection: SelectionState,
    hover: Option<f64>,
}

impl DragSelectionController {
    pub fn new(edit_mode: bool) -> Self {
        Self {
            edit_mode,
            selection: SelectionState::None,
            hover: None,
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Turning edit mode off cancels a drag in progress.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
        if !enabled && self.selection.is_dragging() {
            self.transition(SelectionState::None);
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn hover_value(&self) -> Option<f64> {
        self.hover
    }

    pub fn pointer_down_on_min_line(&mut self) {
        self.pointer_down_on(Boundary::Min);
    }

    pub fn pointer_down_on_max_line(&mut self) {
        self.pointer_down_on(Boundary::Max);
    }

    pub fn pointer_down_on(&mut self, boundary: Boundary) {
        if !self.edit_mode {
            trace!(?boundary, "edit mode off, ignoring pointer down");
            return;
        }
        self.transition(SelectionState::dragging(boundary));
    }

    pub fn pointer_up(&mut self) {
        self.transition(SelectionState::None);
    }

    pub fn pointer_leave_chart_area(&mut self) {
        self.transition(SelectionState::None);
        self.hover = None;
    }

    /// Records the hover value and, while dragging, proposes moving the dragged
    /// boundary there. Returns `None` when the move would be a no-op or would
    /// make the boundaries meet or cross.
    pub fn hover(&mut self, value: f64, range: &FilterRange) -> Option<RangeUpdate> {
        debug_assert!(range.is_valid(), "hover requires min < max, got {:?}", range);

        if !value.is_finite() {
            trace!(value, "ignoring non-finite hover value");
            return None;
        }
        if self.hover != Some(value) {
            trace!(value, "hover");
            self.hover = Some(value);
        }

        let update = match self.selection {
            SelectionState::DraggingMin if value != range.min && value < range.max => {
                Some(RangeUpdate::min(value))
            }
            SelectionState::DraggingMax if value != range.max && value > range.min => {
                Some(RangeUpdate::max(value))
            }
            _ => None,
        };
        if let Some(u) = update {
            debug!(boundary = ?u.boundary, value = u.value, "proposing range update");
        }
        update
    }

    /// Line to draw with emphasis for the current hover value. `None` when
    /// nothing is hovered or edit mode is off.
    pub fn emphasized_boundary(&self, range: &FilterRange, tie_break: TieBreak) -> Option<Boundary> {
        if !self.edit_mode {
            return None;
        }
        self.hover
            .map(|h| ViewController::emphasized_boundary(h, range, tie_break))
    }

    fn transition(&mut self, next: SelectionState) {
        if self.selection != next {
            debug!(from = ?self.selection, to = ?next, "selection state change");
            self.selection = next;
        }
    }
}
