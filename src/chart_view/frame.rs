use super::labels::{area_labels, AreaLabel};
use super::FilterChartView;
use crate::bucketing::bucket;
use crate::data_types::{
    Boundary, Bucket, DataPoint, Distribution, FilterRange, SelectionState, ValueBounds,
};

/// Horizontal offset of the line label relative to the line, in pixels.
const MIN_LABEL_OFFSET_X: f32 = -90.0;
const MAX_LABEL_OFFSET_X: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    /// Horizontal resize, shown over draggable lines.
    EwResize,
}

/// One filled area. `bucket` is `None` for the raw series in simple mode.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaLayer {
    pub bucket: Option<Bucket>,
    pub points: Vec<DataPoint>,
    pub color: String,
}

/// A vertical filter line at `value`.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceLine {
    pub boundary: Boundary,
    pub value: f64,
    pub label: String,
    pub label_offset_x: f32,
    pub color: String,
    pub width: f32,
    pub emphasized: bool,
    pub cursor: Cursor,
}

/// Everything a renderer needs to draw one chart state.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub layers: Vec<AreaLayer>,
    pub lines: Vec<ReferenceLine>,
    pub labels: Vec<AreaLabel>,
    /// `None` in simple mode, where no bucketing happens.
    pub distribution: Option<Distribution>,
    pub bounds: Option<ValueBounds>,
    pub selection: SelectionState,
    pub hover: Option<f64>,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

pub(crate) fn build_frame(view: &FilterChartView, range: &FilterRange) -> ChartFrame {
    let config = &view.config;
    let theme = &config.theme;

    if config.simple_mode {
        return ChartFrame {
            layers: vec![AreaLayer {
                bucket: None,
                points: view.series.clone(),
                color: theme.valid.clone(),
            }],
            lines: Vec::new(),
            labels: Vec::new(),
            distribution: None,
            bounds: view.bounds,
            selection: SelectionState::None,
            hover: None,
            x_axis_label: config.x_axis_label.clone(),
            y_axis_label: config.y_axis_label.clone(),
        };
    }

    let bucketed = bucket(&view.series, range);

    // In-range first so the out-of-range layers are painted over it.
    let layers: Vec<AreaLayer> = [Bucket::InRange, Bucket::BelowMin, Bucket::AboveMax]
        .into_iter()
        .map(|b| AreaLayer {
            bucket: Some(b),
            points: bucketed.layer(b),
            color: if b == Bucket::InRange {
                theme.valid.clone()
            } else {
                theme.invalid.clone()
            },
        })
        .collect();

    let emphasized = view.controller.emphasized_boundary(range, config.tie_break);
    let cursor = if config.edit_mode {
        Cursor::EwResize
    } else {
        Cursor::Default
    };
    let lines: Vec<ReferenceLine> = [Boundary::Min, Boundary::Max]
        .into_iter()
        .map(|boundary| {
            let value = range.get(boundary);
            let is_emphasized = emphasized == Some(boundary);
            let (prefix, label_offset_x) = match boundary {
                Boundary::Min => ("Min", MIN_LABEL_OFFSET_X),
                Boundary::Max => ("Max", MAX_LABEL_OFFSET_X),
            };
            ReferenceLine {
                boundary,
                value,
                label: format!("{prefix}: {value}"),
                label_offset_x,
                color: theme.filter.clone(),
                width: if is_emphasized {
                    theme.emphasized_line_width
                } else {
                    theme.line_width
                },
                emphasized: is_emphasized,
                cursor,
            }
        })
        .collect();

    let labels = match bucketed.bounds {
        Some(bounds) => area_labels(
            &view.series,
            range,
            &bounds,
            &bucketed.distribution,
            &theme.label,
        ),
        None => Vec::new(),
    };

    ChartFrame {
        layers,
        lines,
        labels,
        distribution: Some(bucketed.distribution),
        bounds: bucketed.bounds,
        selection: view.controller.selection(),
        hover: view.controller.hover_value(),
        x_axis_label: config.x_axis_label.clone(),
        y_axis_label: config.y_axis_label.clone(),
    }
}
