use cuprum::geom::{collinear_between, point, segment_crossing};

#[test]
fn collinear_between_accepts_interior_points_only() {
    let a = point(0, 0);
    let b = point(1000, 0);
    assert!(collinear_between(a, point(1, 0), b));
    assert!(collinear_between(a, point(999, 0), b));
    assert!(!collinear_between(a, a, b));
    assert!(!collinear_between(a, b, b));
    assert!(!collinear_between(a, point(-1, 0), b));
    assert!(!collinear_between(a, point(1001, 0), b));
    assert!(!collinear_between(a, point(500, 1), b));
}

#[test]
fn collinear_between_works_off_axis() {
    assert!(collinear_between(point(0, 0), point(200, 100), point(400, 200)));
    assert!(!collinear_between(point(0, 0), point(200, 101), point(400, 200)));
}

#[test]
fn a_degenerate_segment_has_no_interior() {
    let a = point(42, 42);
    assert!(!collinear_between(a, point(42, 42), a));
    assert!(!collinear_between(a, point(43, 42), a));
}

#[test]
fn collinear_between_does_not_overflow_on_huge_coordinates() {
    // Cross products of these would wrap an i64 many times over.
    let a = point(0, 0);
    let b = point(2_000_000_000_000_000, 2_000_000_000_000_000);
    assert!(collinear_between(a, point(1_000_000_000_000_000, 1_000_000_000_000_000), b));
    assert!(!collinear_between(a, point(1_000_000_000_000_000, 999_999_999_999_999), b));
}

#[test]
fn orthogonal_segments_cross_at_the_obvious_point() {
    let hit = segment_crossing(
        point(0, 0),
        point(1000, 0),
        point(700, 1000),
        point(700, -1000),
    );
    assert_eq!(hit, Some(point(700, 0)));
}

#[test]
fn diagonal_segments_cross_when_the_point_is_on_grid() {
    let hit = segment_crossing(
        point(0, 0),
        point(1000, 1000),
        point(0, 1000),
        point(1000, 0),
    );
    assert_eq!(hit, Some(point(500, 500)));
}

#[test]
fn an_off_grid_crossing_reports_none() {
    assert_eq!(
        segment_crossing(point(0, 0), point(3, 3), point(0, 3), point(3, 0)),
        None
    );
}

#[test]
fn touching_endpoints_are_not_crossings() {
    // Shared endpoint.
    assert_eq!(
        segment_crossing(point(0, 0), point(1000, 0), point(1000, 0), point(1000, 1000)),
        None
    );
    // T-touch: an endpoint on the other segment's interior.
    assert_eq!(
        segment_crossing(point(0, 0), point(1000, 0), point(500, 0), point(500, 1000)),
        None
    );
}

#[test]
fn parallel_and_collinear_segments_never_cross() {
    assert_eq!(
        segment_crossing(point(0, 0), point(1000, 0), point(0, 10), point(1000, 10)),
        None
    );
    assert_eq!(
        segment_crossing(point(0, 0), point(1000, 0), point(500, 0), point(1500, 0)),
        None
    );
}

#[test]
fn crossings_outside_a_segment_report_none() {
    // The infinite lines meet at (2000, 0), beyond the first segment.
    assert_eq!(
        segment_crossing(point(0, 0), point(1000, 0), point(2000, -1000), point(2000, 1000)),
        None
    );
}
