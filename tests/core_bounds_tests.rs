use smoke_chart::core::{Bounds, BoundingBox};

#[test]
fn bounds_clamp_every_negative_input_to_zero() {
    let bounds = Bounds::new(-3.0, 8.0, -100.0, -0.25);
    assert!(bounds.x_min() >= 0.0);
    assert!(bounds.x_max() >= 0.0);
    assert!(bounds.y_min() >= 0.0);
    assert!(bounds.y_max() >= 0.0);
    assert_eq!(bounds.x_max(), 8.0);
}

#[test]
fn ranges_are_inclusive_of_both_endpoints() {
    let bounds = Bounds::new(1.0, 5.0, 0.0, 100.0);
    assert_eq!(bounds.x_range(), 5.0);
    assert_eq!(bounds.y_range(), 101.0);
}

#[test]
fn equal_extents_still_produce_a_unit_range() {
    let bounds = Bounds::new(7.0, 7.0, 0.0, 0.0);
    assert_eq!(bounds.x_range(), 1.0);
    assert_eq!(bounds.y_range(), 1.0);
}

#[test]
fn inverted_extents_are_tolerated() {
    let bounds = Bounds::new(10.0, 2.0, 90.0, 30.0);
    assert_eq!(bounds.x_range(), 9.0);
    assert_eq!(bounds.y_range(), 61.0);
}

#[test]
fn bounding_box_edges_derive_from_backing_fields() {
    let region = BoundingBox::new(12.0, 34.0, 400.0, 300.0);
    assert_eq!(region.left(), 12.0);
    assert_eq!(region.right(), 412.0);
    assert_eq!(region.top(), 34.0);
    assert_eq!(region.bottom(), 334.0);
}

#[test]
fn bounding_box_permits_negative_extents() {
    let region = BoundingBox::new(50.0, 60.0, -20.0, -30.0);
    assert_eq!(region.right(), 30.0);
    assert_eq!(region.bottom(), 30.0);
}
