//! range_filter_chart crate: the interaction state and data bucketing behind
//! an area chart with draggable min/max filter lines.

pub mod bucketing;
pub mod chart_view;
pub mod config;
pub mod data_types;
pub mod host;
pub mod selection;
pub mod theme;
pub mod utils;
pub mod view_controller;

pub use bucketing::{bucket, bucket_par, BucketedSeries};
pub use chart_view::{ChartFrame, FilterChartView};
pub use data_types::{
    Boundary, Bucket, DataPoint, Distribution, FilterChartConfig, FilterRange, RangeUpdate,
    SelectionState, Series, TieBreak, ValueBounds,
};
pub use host::FilterHost;
pub use selection::DragSelectionController;
pub use theme::ChartTheme;
