use crate::data_types::{Bucket, DataPoint, Distribution, FilterRange, ValueBounds};
use crate::utils::format_with_separators;
use crate::view_controller::ViewController;

/// Aggregate label drawn inside one zone of the chart: the bucket total and
/// its share of the grand total.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaLabel {
    pub bucket: Bucket,
    /// Series value the label is centered on.
    pub anchor: f64,
    pub total_text: String,
    pub percent: i64,
    pub percent_text: String,
    pub color: String,
}

/// `[left, right]` value span of the zone holding `bucket`.
pub fn zone_span(bucket: Bucket, range: &FilterRange, bounds: &ValueBounds) -> (f64, f64) {
    match bucket {
        Bucket::BelowMin => (bounds.min_value, range.min),
        Bucket::InRange => (range.min, range.max),
        Bucket::AboveMax => (range.max, bounds.max_value),
    }
}

/// Labels for every zone wide enough to hold one, left to right.
pub fn area_labels(
    series: &[DataPoint],
    range: &FilterRange,
    bounds: &ValueBounds,
    distribution: &Distribution,
    color: &str,
) -> Vec<AreaLabel> {
    let full_span = bounds.span();
    let grand_total = distribution.grand_total();

    Bucket::ALL
        .iter()
        .filter_map(|&bucket| {
            let (left, right) = zone_span(bucket, range, bounds);
            if !ViewController::should_render_zone(full_span, left, right) {
                return None;
            }
            let anchor = ViewController::zone_anchor(series, left + (right - left) / 2.0)?;
            let stats = distribution.get(bucket);
            let percent = ViewController::percent_of(stats.total, grand_total);
            Some(AreaLabel {
                bucket,
                anchor,
                total_text: format_with_separators(stats.total),
                percent,
                percent_text: format!("{percent}%"),
                color: color.to_string(),
            })
        })
        .collect()
}
