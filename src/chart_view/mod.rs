//! Renderer-independent view model of the filter chart.
//!
//! [`FilterChartView`] owns the series, the configuration and the drag
//! controller of one chart instance. Each render asks it for a
//! [`ChartFrame`] describing what to draw for the host's current range;
//! pointer events go through the handlers in [`input`].

pub mod frame;
pub mod input;
pub mod labels;

pub use frame::{AreaLayer, ChartFrame, Cursor, ReferenceLine};
pub use input::MouseMoveEvent;
pub use labels::AreaLabel;

use crate::bucketing::value_bounds;
use crate::data_types::{DataPoint, FilterChartConfig, FilterRange, ValueBounds};
use crate::selection::DragSelectionController;

pub struct FilterChartView {
    series: Vec<DataPoint>,
    config: FilterChartConfig,
    controller: DragSelectionController,
    bounds: Option<ValueBounds>,
}

impl FilterChartView {
    pub fn new(series: Vec<DataPoint>, config: FilterChartConfig) -> Self {
        let bounds = value_bounds(&series);
        let controller = DragSelectionController::new(config.edit_mode);
        Self {
            series,
            config,
            controller,
            bounds,
        }
    }

    pub fn series(&self) -> &[DataPoint] {
        &self.series
    }

    pub fn config(&self) -> &FilterChartConfig {
        &self.config
    }

    /// Replaces the configuration. A drag in progress is cancelled when edit
    /// mode goes off or simple mode goes on.
    pub fn set_config(&mut self, config: FilterChartConfig) {
        self.controller.set_edit_mode(config.edit_mode);
        if config.simple_mode {
            self.controller.pointer_leave_chart_area();
        }
        self.config = config;
    }

    pub fn controller(&self) -> &DragSelectionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DragSelectionController {
        &mut self.controller
    }

    /// Value span of the whole series, `None` when it is empty.
    pub fn value_bounds(&self) -> Option<ValueBounds> {
        self.bounds
    }

    /// Display description for the given range.
    pub fn frame(&self, range: &FilterRange) -> ChartFrame {
        frame::build_frame(self, range)
    }
}
