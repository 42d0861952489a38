use line_chart_rs::core::LinearScale;

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn descending_range_inverts_axis() {
    let scale = LinearScale::new(-5.0, 16.0, 60.0, 0.0).expect("valid scale");

    assert_eq!(scale.domain_to_pixel(-5.0).expect("bottom"), 60.0);
    assert_eq!(scale.domain_to_pixel(16.0).expect("top"), 0.0);
    assert!((scale.pixel_to_domain(30.0).expect("middle") - 5.5).abs() <= 1e-9);
}

#[test]
fn degenerate_scales_are_rejected() {
    assert!(LinearScale::new(1.0, 1.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, f64::INFINITY, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, f64::NAN, 100.0).is_err());

    let flat_range = LinearScale::new(0.0, 1.0, 5.0, 5.0).expect("flat range");
    assert!(flat_range.pixel_to_domain(5.0).is_err());
    assert!(flat_range.domain_to_pixel(f64::NAN).is_err());
}
