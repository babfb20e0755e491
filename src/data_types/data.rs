use serde::{Deserialize, Serialize};

/// One sample of the distribution: `value` on the x-axis, `result` on the y-axis.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: f64,
    #[serde(alias = "results")]
    pub result: f64,
}

impl DataPoint {
    pub fn new(value: f64, result: f64) -> Self {
        Self { value, result }
    }
}

/// Ordered input series. Insertion order is x-axis order.
pub type Series = Vec<DataPoint>;

/// Classification of a point against the filter range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    BelowMin,
    InRange,
    AboveMax,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::BelowMin, Bucket::InRange, Bucket::AboveMax];
}

/// Stacked-area friendly decomposition of a [`DataPoint`].
/// Exactly one of the three result fields carries the original `result`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BucketedPoint {
    pub value: f64,
    pub below_min_result: f64,
    pub above_max_result: f64,
    pub in_range_result: f64,
    pub bucket: Bucket,
}

impl BucketedPoint {
    pub fn new(point: &DataPoint, bucket: Bucket) -> Self {
        let mut bucketed = Self {
            value: point.value,
            below_min_result: 0.0,
            above_max_result: 0.0,
            in_range_result: 0.0,
            bucket,
        };
        match bucket {
            Bucket::BelowMin => bucketed.below_min_result = point.result,
            Bucket::InRange => bucketed.in_range_result = point.result,
            Bucket::AboveMax => bucketed.above_max_result = point.result,
        }
        bucketed
    }

    /// The y value this point contributes to the given bucket's layer.
    pub fn result_for(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::BelowMin => self.below_min_result,
            Bucket::InRange => self.in_range_result,
            Bucket::AboveMax => self.above_max_result,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct BucketStats {
    pub count: usize,
    pub total: f64,
}

impl BucketStats {
    #[inline]
    pub fn record(&mut self, result: f64) {
        self.count += 1;
        self.total += result;
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            total: self.total + other.total,
        }
    }
}

/// Aggregate count/total per bucket for one bucketing pass.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Distribution {
    pub below_min: BucketStats,
    pub in_range: BucketStats,
    pub above_max: BucketStats,
}

impl Distribution {
    pub fn get(&self, bucket: Bucket) -> &BucketStats {
        match bucket {
            Bucket::BelowMin => &self.below_min,
            Bucket::InRange => &self.in_range,
            Bucket::AboveMax => &self.above_max,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut BucketStats {
        match bucket {
            Bucket::BelowMin => &mut self.below_min,
            Bucket::InRange => &mut self.in_range,
            Bucket::AboveMax => &mut self.above_max,
        }
    }

    #[inline]
    pub fn record(&mut self, bucket: Bucket, result: f64) {
        self.get_mut(bucket).record(result);
    }

    /// Number of points across all buckets.
    pub fn count(&self) -> usize {
        self.below_min.count + self.in_range.count + self.above_max.count
    }

    /// Sum of results across all buckets.
    pub fn grand_total(&self) -> f64 {
        self.below_min.total + self.in_range.total + self.above_max.total
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            below_min: self.below_min.merge(other.below_min),
            in_range: self.in_range.merge(other.in_range),
            above_max: self.above_max.merge(other.above_max),
        }
    }
}

/// Smallest and largest `value` observed in a series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min_value: f64,
    pub max_value: f64,
}

impl ValueBounds {
    pub fn at(value: f64) -> Self {
        Self {
            min_value: value,
            max_value: value,
        }
    }

    pub fn span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Combines two optional bounds, `None` being the identity.
    pub fn merge(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Self {
                min_value: a.min_value.min(b.min_value),
                max_value: a.max_value.max(b.max_value),
            }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}
