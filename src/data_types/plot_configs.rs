use serde::{Deserialize, Serialize};

use super::state::TieBreak;
use crate::theme::ChartTheme;

/// Host-supplied configuration of one filter chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterChartConfig {
    /// When off, the filter lines cannot be dragged and are never emphasized.
    pub edit_mode: bool,
    /// Renders the raw series as a single area, without lines, labels or interaction.
    pub simple_mode: bool,
    pub tie_break: TieBreak,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub theme: ChartTheme,
}

impl Default for FilterChartConfig {
    fn default() -> Self {
        Self {
            edit_mode: true,
            simple_mode: false,
            tie_break: TieBreak::default(),
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            theme: ChartTheme::default(),
        }
    }
}

impl FilterChartConfig {
    pub fn with_edit_mode(mut self, enabled: bool) -> Self {
        self.edit_mode = enabled;
        self
    }

    pub fn with_simple_mode(mut self, enabled: bool) -> Self {
        self.simple_mode = enabled;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_label = x.into();
        self.y_axis_label = y.into();
        self
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }
}
