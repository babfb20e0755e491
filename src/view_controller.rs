use crate::data_types::{Boundary, DataPoint, FilterRange, TieBreak, ValueBounds};

/// Zones narrower than this fraction of the full value span get no label.
pub const LABEL_MIN_SPAN_DIVISOR: f64 = 9.0;

/// ViewController holds the interaction math of the filter chart
/// independently of any rendering library to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Maps an x pixel offset inside the plot area onto the series' value span.
    /// Positions outside the plot are clamped to its edges. `None` when the
    /// pointer position or the plot width is not a finite number.
    pub fn map_pixel_to_value(x: f32, plot_width: f32, bounds: &ValueBounds) -> Option<f64> {
        if !x.is_finite() || !plot_width.is_finite() {
            return None;
        }
        if plot_width <= 0.0 {
            return Some(bounds.min_value);
        }
        let pct = (x / plot_width).clamp(0.0, 1.0) as f64;
        Some(bounds.min_value + bounds.span() * pct)
    }

    /// Resolves a continuous x position to the nearest `value` present in the series,
    /// the way a tooltip snaps to the closest category. The first point wins on ties.
    pub fn snap_to_nearest_value(series: &[DataPoint], value: f64) -> Option<f64> {
        Self::closest_value(series, value)
    }

    /// Series value closest to the center of a zone, used to anchor its label.
    pub fn zone_anchor(series: &[DataPoint], center: f64) -> Option<f64> {
        Self::closest_value(series, center)
    }

    fn closest_value(series: &[DataPoint], target: f64) -> Option<f64> {
        if target.is_nan() {
            return None;
        }
        let mut best: Option<f64> = None;
        for p in series {
            best = match best {
                Some(b) if (target - p.value).abs() < (target - b).abs() => Some(p.value),
                Some(b) => Some(b),
                None => Some(p.value),
            };
        }
        best
    }

    /// The boundary closest to the hover value. Equal distances go to `tie_break`.
    pub fn emphasized_boundary(hover: f64, range: &FilterRange, tie_break: TieBreak) -> Boundary {
        let distance_to_min = (range.min - hover).abs();
        let distance_to_max = (range.max - hover).abs();

        if distance_to_min < distance_to_max {
            Boundary::Min
        } else if distance_to_max < distance_to_min {
            Boundary::Max
        } else {
            match tie_break {
                TieBreak::FavorMin => Boundary::Min,
                TieBreak::FavorMax => Boundary::Max,
            }
        }
    }

    /// Whether a zone `[border_left, border_right]` is wide enough to carry a label.
    pub fn should_render_zone(total_span: f64, border_left: f64, border_right: f64) -> bool {
        border_right - border_left > total_span / LABEL_MIN_SPAN_DIVISOR
    }

    /// Share of `part` in `total` as a whole percentage. A zero total yields 0.
    pub fn percent_of(part: f64, total: f64) -> i64 {
        if total == 0.0 || !total.is_finite() {
            return 0;
        }
        (part / total * 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_first_wins_on_tie() {
        let series = vec![DataPoint::new(10.0, 0.0), DataPoint::new(20.0, 0.0)];
        assert_eq!(ViewController::snap_to_nearest_value(&series, 15.0), Some(10.0));
        assert_eq!(ViewController::snap_to_nearest_value(&series, 15.1), Some(20.0));
        assert_eq!(ViewController::snap_to_nearest_value(&[], 15.0), None);
        assert_eq!(ViewController::snap_to_nearest_value(&series, f64::NAN), None);
    }
}
