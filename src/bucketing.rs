//! Partitioning of a series against a filter range.
//!
//! Every point lands in exactly one of three buckets: `value < min`,
//! `value > max`, or in range (boundaries included). The bucketed points keep
//! the input order so they can be drawn as three stacked area layers.

use rayon::prelude::*;

use crate::data_types::{Bucket, BucketedPoint, DataPoint, Distribution, FilterRange, ValueBounds};

/// Output of one bucketing pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BucketedSeries {
    pub points: Vec<BucketedPoint>,
    pub distribution: Distribution,
    /// `None` for an empty series.
    pub bounds: Option<ValueBounds>,
}

impl BucketedSeries {
    /// The `(value, result)` pairs of one stacked layer. Points outside the
    /// bucket contribute a zero result so all layers share the same x values.
    pub fn layer(&self, bucket: Bucket) -> Vec<DataPoint> {
        self.points
            .iter()
            .map(|p| DataPoint::new(p.value, p.result_for(bucket)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Buckets `series` against `range` in a single sequential pass.
pub fn bucket(series: &[DataPoint], range: &FilterRange) -> BucketedSeries {
    debug_assert!(
        range.is_valid(),
        "bucketing requires min < max, got {:?}",
        range
    );

    let mut points = Vec::with_capacity(series.len());
    let mut distribution = Distribution::default();
    let mut bounds = None;

    for p in series {
        let b = range.classify(p.value);
        points.push(BucketedPoint::new(p, b));
        distribution.record(b, p.result);
        bounds = ValueBounds::merge(bounds, Some(ValueBounds::at(p.value)));
    }

    BucketedSeries {
        points,
        distribution,
        bounds,
    }
}

/// Same as [`bucket`], computed with rayon. Totals can differ from the
/// sequential pass in the last bits because summation order differs.
pub fn bucket_par(series: &[DataPoint], range: &FilterRange) -> BucketedSeries {
    debug_assert!(
        range.is_valid(),
        "bucketing requires min < max, got {:?}",
        range
    );

    let points: Vec<BucketedPoint> = series
        .par_iter()
        .map(|p| BucketedPoint::new(p, range.classify(p.value)))
        .collect();

    let (distribution, bounds) = points
        .par_iter()
        .zip(series.par_iter())
        .fold(
            || (Distribution::default(), None::<ValueBounds>),
            |(mut dist, bounds), (bp, p)| {
                dist.record(bp.bucket, p.result);
                (dist, ValueBounds::merge(bounds, Some(ValueBounds::at(p.value))))
            },
        )
        .reduce(
            || (Distribution::default(), None),
            |(d1, b1), (d2, b2)| (d1.merge(d2), ValueBounds::merge(b1, b2)),
        );

    BucketedSeries {
        points,
        distribution,
        bounds,
    }
}

/// Smallest and largest `value` of the series, `None` when empty.
pub fn value_bounds(series: &[DataPoint]) -> Option<ValueBounds> {
    series.iter().fold(None, |acc, p| {
        ValueBounds::merge(acc, Some(ValueBounds::at(p.value)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_in_range() {
        let range = FilterRange::new(10.0, 20.0).unwrap();
        let series = vec![DataPoint::new(10.0, 1.0), DataPoint::new(20.0, 2.0)];
        let out = bucket(&series, &range);
        assert_eq!(out.distribution.in_range.count, 2);
        assert_eq!(out.distribution.in_range.total, 3.0);
    }

    #[test]
    fn test_bounds_track_unsorted_values() {
        // A new minimum must not prevent the maximum from updating on later points.
        let series = vec![
            DataPoint::new(5.0, 0.0),
            DataPoint::new(1.0, 0.0),
            DataPoint::new(9.0, 0.0),
            DataPoint::new(3.0, 0.0),
        ];
        let vb = value_bounds(&series).unwrap();
        assert_eq!(vb.min_value, 1.0);
        assert_eq!(vb.max_value, 9.0);
    }
}
