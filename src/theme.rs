use serde::{Deserialize, Serialize};

/// Colors (CSS color strings) and stroke sizes handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    /// Fill/stroke of the in-range area (and of the whole area in simple mode).
    pub valid: String,
    /// Fill/stroke of the below-min and above-max areas.
    pub invalid: String,
    /// Filter reference lines and their labels.
    pub filter: String,
    /// Area label text.
    pub label: String,
    pub line_width: f32,
    pub emphasized_line_width: f32,
    pub font_size: f32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            valid: "#56c990".to_string(),
            invalid: "grey".to_string(),
            filter: "red".to_string(),
            label: "black".to_string(),
            line_width: 2.0,
            emphasized_line_width: 6.0,
            font_size: 22.0,
        }
    }
}

impl ChartTheme {
    pub fn with_valid(mut self, color: impl Into<String>) -> Self {
        self.valid = color.into();
        self
    }

    pub fn with_invalid(mut self, color: impl Into<String>) -> Self {
        self.invalid = color.into();
        self
    }

    pub fn with_filter(mut self, color: impl Into<String>) -> Self {
        self.filter = color.into();
        self
    }

    pub fn with_label(mut self, color: impl Into<String>) -> Self {
        self.label = color.into();
        self
    }
}
