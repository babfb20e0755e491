use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use range_filter_chart::bucketing::{bucket, bucket_par, value_bounds};
use range_filter_chart::data_types::{Bucket, DataPoint, FilterRange};

fn random_series(rng: &mut StdRng, n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|_| {
            DataPoint::new(
                rng.random_range(0..500) as f64,
                rng.random_range(0..1000) as f64,
            )
        })
        .collect()
}

#[test]
fn test_three_point_scenario() {
    let series = vec![
        DataPoint::new(0.0, 10.0),
        DataPoint::new(50.0, 20.0),
        DataPoint::new(100.0, 5.0),
    ];
    let range = FilterRange::new(25.0, 75.0).unwrap();
    let out = bucket(&series, &range);

    assert_eq!(out.points[0].bucket, Bucket::BelowMin);
    assert_eq!(out.points[0].below_min_result, 10.0);
    assert_eq!(out.points[0].in_range_result, 0.0);
    assert_eq!(out.points[0].above_max_result, 0.0);

    assert_eq!(out.points[1].bucket, Bucket::InRange);
    assert_eq!(out.points[1].in_range_result, 20.0);

    assert_eq!(out.points[2].bucket, Bucket::AboveMax);
    assert_eq!(out.points[2].above_max_result, 5.0);

    assert_eq!(out.distribution.below_min.count, 1);
    assert_eq!(out.distribution.below_min.total, 10.0);
    assert_eq!(out.distribution.in_range.count, 1);
    assert_eq!(out.distribution.in_range.total, 20.0);
    assert_eq!(out.distribution.above_max.count, 1);
    assert_eq!(out.distribution.above_max.total, 5.0);

    let bounds = out.bounds.unwrap();
    assert_eq!(bounds.min_value, 0.0);
    assert_eq!(bounds.max_value, 100.0);
}

#[test]
fn test_empty_series() {
    let range = FilterRange::new(25.0, 75.0).unwrap();
    let out = bucket(&[], &range);
    assert!(out.is_empty());
    assert_eq!(out.distribution.count(), 0);
    assert_eq!(out.distribution.grand_total(), 0.0);
    assert!(out.bounds.is_none());
    assert!(value_bounds(&[]).is_none());
}

#[test]
fn test_partition_and_conservation() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.random_range(0..300);
        let series = random_series(&mut rng, n);
        let min = rng.random_range(-10.0..400.0);
        let max = min + rng.random_range(0.5..200.0);
        let range = FilterRange::new(min, max).unwrap();

        let out = bucket(&series, &range);
        assert_eq!(out.len(), series.len());
        assert_eq!(out.distribution.count(), series.len());

        let sum: f64 = series.iter().map(|p| p.result).sum();
        assert!((out.distribution.grand_total() - sum).abs() < 1e-6);

        for (bp, p) in out.points.iter().zip(&series) {
            assert_eq!(bp.value, p.value);
            let non_zero: Vec<Bucket> = Bucket::ALL
                .into_iter()
                .filter(|&b| b != bp.bucket)
                .filter(|&b| bp.result_for(b) != 0.0)
                .collect();
            assert!(non_zero.is_empty(), "result leaked into {:?}", non_zero);
            assert_eq!(bp.result_for(bp.bucket), p.result);
            assert_eq!(bp.bucket, range.classify(p.value));
        }
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(99);
    let series = random_series(&mut rng, 20_000);
    let range = FilterRange::new(120.0, 360.0).unwrap();

    let seq = bucket(&series, &range);
    let par = bucket_par(&series, &range);

    // Integer-valued results: sums are exact in any order.
    assert_eq!(seq, par);
}

#[test]
fn test_layers_share_x_values() {
    let series = vec![
        DataPoint::new(0.0, 10.0),
        DataPoint::new(50.0, 20.0),
        DataPoint::new(100.0, 5.0),
    ];
    let range = FilterRange::new(25.0, 75.0).unwrap();
    let out = bucket(&series, &range);

    let in_range = out.layer(Bucket::InRange);
    let below = out.layer(Bucket::BelowMin);
    assert_eq!(
        in_range.iter().map(|p| p.value).collect::<Vec<_>>(),
        vec![0.0, 50.0, 100.0]
    );
    assert_eq!(
        in_range.iter().map(|p| p.result).collect::<Vec<_>>(),
        vec![0.0, 20.0, 0.0]
    );
    assert_eq!(
        below.iter().map(|p| p.result).collect::<Vec<_>>(),
        vec![10.0, 0.0, 0.0]
    );
}
