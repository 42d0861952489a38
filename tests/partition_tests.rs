use line_chart_rs::core::{DataPoint, SeriesDefinition, SeriesKey, partition};

fn example_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(2.0, 15.0, "a"),
        DataPoint::new(3.0, 8.0, "b"),
        DataPoint::new(1.0, -5.0, "a"),
    ]
}

fn series(keys: &[&str]) -> Vec<SeriesDefinition> {
    keys.iter()
        .map(|key| SeriesDefinition::new(*key, format!("line line__{key}")))
        .collect()
}

#[test]
fn partition_groups_and_sorts_each_series_by_x() {
    let data = partition(&example_points(), &series(&["a", "b"]));

    let a = data.get(&SeriesKey::new("a")).expect("series a");
    assert_eq!(a, [DataPoint::new(1.0, -5.0, "a"), DataPoint::new(2.0, 15.0, "a")]);
    let b = data.get(&SeriesKey::new("b")).expect("series b");
    assert_eq!(b, [DataPoint::new(3.0, 8.0, "b")]);
    assert_eq!(data.dropped(), 0);
}

#[test]
fn partition_keeps_declaration_order_and_empty_series() {
    let data = partition(&example_points(), &series(&["c", "b", "a"]));

    let keys: Vec<&str> = data.keys().map(SeriesKey::as_str).collect();
    assert_eq!(keys, ["c", "b", "a"]);
    assert_eq!(data.get(&SeriesKey::new("c")).map(<[DataPoint]>::len), Some(0));
}

#[test]
fn partition_drops_and_counts_points_of_undeclared_series() {
    let mut points = example_points();
    points.push(DataPoint::new(4.0, 1.0, "ghost"));
    points.push(DataPoint::new(5.0, 2.0, "ghost"));

    let data = partition(&points, &series(&["a"]));

    assert_eq!(data.len(), 1);
    assert_eq!(data.point_count(), 2);
    assert_eq!(data.dropped(), 3);
    assert!(data.get(&SeriesKey::new("ghost")).is_none());
}

#[test]
fn partition_sort_is_stable_for_equal_x() {
    let points = vec![
        DataPoint::new(2.0, 1.0, "a"),
        DataPoint::new(1.0, 2.0, "a"),
        DataPoint::new(2.0, 3.0, "a"),
        DataPoint::new(1.0, 4.0, "a"),
    ];

    let data = partition(&points, &series(&["a"]));
    let ys: Vec<f64> = data
        .get(&SeriesKey::new("a"))
        .expect("series a")
        .iter()
        .map(|point| point.y)
        .collect();
    assert_eq!(ys, [2.0, 4.0, 1.0, 3.0]);
}

#[test]
fn partition_without_series_drops_everything() {
    let data = partition(&example_points(), &Vec::<SeriesDefinition>::new());
    assert!(data.is_empty());
    assert_eq!(data.dropped(), 3);
}
