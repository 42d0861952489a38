use approx::assert_relative_eq;
use line_chart_rs::ChartError;
use line_chart_rs::core::{AxisDomain, DataPoint, compute_axis_plan, derive_domain};

fn example_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(1.0, -5.0, "a"),
        DataPoint::new(2.0, 15.0, "a"),
        DataPoint::new(3.0, 8.0, "b"),
    ]
}

#[test]
fn example_dataset_yields_documented_plan() {
    let plan = compute_axis_plan(&example_points(), 1.0).expect("plan");

    assert_eq!(
        plan.domain,
        AxisDomain {
            x_min: 1.0,
            x_max: 3.0,
            y_min: -5.0,
            y_max: 16.0,
        }
    );
    assert_eq!(plan.tick_plan.factor, 4.0);
    assert_eq!(plan.tick_plan.multiplier, 4.0);
}

#[test]
fn positive_data_keeps_zero_baseline() {
    let points = vec![
        DataPoint::new(10.0, 3.0, "a"),
        DataPoint::new(20.0, 8.0, "a"),
    ];
    let (domain, tick_plan) = derive_domain(&points, 1.0).expect("domain");

    assert_eq!(domain.y_min, 0.0);
    assert_eq!(domain.y_max, 8.0);
    assert_eq!(tick_plan.factor, 1.0);
}

#[test]
fn y_max_rounds_up_to_small_tick_factor() {
    let points = vec![DataPoint::new(0.0, 0.1, "a"), DataPoint::new(1.0, 0.7, "a")];
    let plan = compute_axis_plan(&points, 1.0).expect("plan");

    assert_relative_eq!(plan.tick_plan.factor, 0.1);
    assert_relative_eq!(plan.domain.y_max, 0.7, epsilon = 1e-9);
    assert!(plan.domain.y_max >= 0.7);
}

#[test]
fn y_max_never_rounds_below_noisy_maximum() {
    let raw_max = 0.01 + 0.05;
    let points = vec![DataPoint::new(0.0, 0.0, "a"), DataPoint::new(1.0, raw_max, "a")];
    let plan = compute_axis_plan(&points, 1.0).expect("plan");

    assert_relative_eq!(plan.tick_plan.factor, 0.01);
    assert!(plan.domain.y_max >= raw_max);
    assert!(plan.domain.y_max - raw_max < plan.tick_plan.factor);
}

#[test]
fn unordered_points_use_extreme_x_values() {
    let points = vec![
        DataPoint::new(30.0, 1.0, "b"),
        DataPoint::new(-4.0, 2.0, "a"),
        DataPoint::new(12.0, 3.0, "c"),
    ];
    let (domain, _) = derive_domain(&points, 1.0).expect("domain");
    assert_eq!((domain.x_min, domain.x_max), (-4.0, 30.0));
}

#[test]
fn empty_dataset_is_an_error() {
    let err = compute_axis_plan(&[], 1.0).expect_err("empty");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn zero_tick_factor_is_an_error() {
    let err = compute_axis_plan(&example_points(), 0.0).expect_err("zero factor");
    assert!(matches!(err, ChartError::InvalidConfiguration(_)));
}

#[test]
fn non_finite_points_are_rejected() {
    let points = vec![DataPoint::new(f64::NAN, 1.0, "a")];
    let err = compute_axis_plan(&points, 1.0).expect_err("nan");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
