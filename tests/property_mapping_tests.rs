use proptest::prelude::*;
use smoke_chart::api::{value_to_row_px, x_index_to_px};
use smoke_chart::core::{Bounds, BoundingBox};

proptest! {
    #[test]
    fn bounds_never_expose_negative_extents(
        x_min in -1_000.0f64..1_000.0,
        x_max in -1_000.0f64..1_000.0,
        y_min in -1_000.0f64..1_000.0,
        y_max in -1_000.0f64..1_000.0
    ) {
        let bounds = Bounds::new(x_min, x_max, y_min, y_max);
        prop_assert!(bounds.x_min() >= 0.0);
        prop_assert!(bounds.x_max() >= 0.0);
        prop_assert!(bounds.y_min() >= 0.0);
        prop_assert!(bounds.y_max() >= 0.0);
        prop_assert!(bounds.x_range() >= 1.0);
        prop_assert!(bounds.y_range() >= 1.0);
    }

    #[test]
    fn horizontal_step_is_exactly_one_cell_width(
        x_max in 1.0f64..500.0,
        index in 0.0f64..500.0,
        width in 10.0f64..4_000.0
    ) {
        let bounds = Bounds::new(0.0, x_max, 0.0, 100.0);
        let region = BoundingBox::new(0.0, 0.0, width, 300.0);
        let step = region.width / bounds.x_range();

        let here = x_index_to_px(bounds, region, index);
        let next = x_index_to_px(bounds, region, index + 1.0);
        prop_assert!((next - here - step).abs() <= 1e-9 * step.max(1.0));
    }

    #[test]
    fn vertical_mapping_decreases_as_values_grow(
        y_max in 1.0f64..10_000.0,
        low_factor in 0.0f64..0.99,
        gap_factor in 0.01f64..1.0,
        height in 10.0f64..4_000.0
    ) {
        let bounds = Bounds::new(0.0, 10.0, 0.0, y_max);
        let region = BoundingBox::new(0.0, 0.0, 400.0, height);

        let low = low_factor * y_max;
        let high = low + gap_factor * (y_max - low);

        let low_row = value_to_row_px(bounds, region, low);
        let high_row = value_to_row_px(bounds, region, high);
        prop_assert!(high_row < low_row);
    }

    #[test]
    fn y_min_maps_to_region_height(
        y_min in 0.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        height in 10.0f64..4_000.0
    ) {
        let bounds = Bounds::new(0.0, 10.0, y_min, y_min + span);
        let region = BoundingBox::new(0.0, 0.0, 400.0, height);
        let row = value_to_row_px(bounds, region, y_min);
        prop_assert!((row - height).abs() <= 1e-9);
    }
}
