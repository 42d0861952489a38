use chrono::TimeZone;
use chrono::Utc;
use rust_decimal::Decimal;

use line_chart_rs::core::DataPoint;

#[test]
fn data_point_from_decimal_time_is_supported() {
    let time = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid ts");
    let point = DataPoint::from_decimal_time(time, Decimal::new(12345, 2), "rates").expect("point");

    assert!((point.x - 1_700_000_000.0).abs() <= 1e-6);
    assert!((point.y - 123.45).abs() <= 1e-9);
    assert_eq!(point.set.as_str(), "rates");
}
