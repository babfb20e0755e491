use tracing::trace;

use super::FilterChartView;
use crate::data_types::{Boundary, FilterRange, RangeUpdate};
use crate::view_controller::ViewController;

/// Pointer position over the plot area, in pixels from its left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseMoveEvent {
    pub x: f32,
    pub plot_width: f32,
}

impl FilterChartView {
    /// Pointer pressed on one of the filter lines.
    pub fn handle_mouse_down(&mut self, line: Boundary) {
        if self.config.simple_mode {
            return;
        }
        self.controller.pointer_down_on(line);
    }

    pub fn handle_mouse_up(&mut self) {
        self.controller.pointer_up();
    }

    pub fn handle_mouse_leave(&mut self) {
        self.controller.pointer_leave_chart_area();
    }

    /// Maps the pixel position onto the series' value span, snaps it to the
    /// nearest data value and feeds it to the controller.
    pub fn handle_mouse_move(
        &mut self,
        event: MouseMoveEvent,
        range: &FilterRange,
    ) -> Option<RangeUpdate> {
        if self.config.simple_mode {
            return None;
        }
        let bounds = self.bounds?;
        let Some(raw) = ViewController::map_pixel_to_value(event.x, event.plot_width, &bounds)
        else {
            trace!(
                x = event.x,
                plot_width = event.plot_width,
                "ignoring non-finite pointer position"
            );
            return None;
        };
        let value = ViewController::snap_to_nearest_value(&self.series, raw)?;
        trace!(x = event.x, raw, value, "mouse move resolved");
        self.controller.hover(value, range)
    }

    /// Hover with a value already resolved by the host (e.g. a tooltip label).
    pub fn handle_hover_value(&mut self, value: f64, range: &FilterRange) -> Option<RangeUpdate> {
        if self.config.simple_mode {
            return None;
        }
        self.controller.hover(value, range)
    }
}
