use tilify_core::error::TilifyError;
use tilify_core::model::{Axis, Placement, Region};

fn geometry<K>(r: &Region<K>) -> (u32, u32, u32, u32) {
    (r.x, r.y, r.w, r.h)
}

#[test]
fn vertical_top_left_placement_fidelity() {
    let mut region: Region<String> = Region::new(0, 0, 400, 400);
    let item = Placement::new("a".to_string(), 0, 0, 120, 80);

    let (first, second) = region
        .split_on_axis(item, Axis::Vertical)
        .expect("in-bounds placement");
    // Same-band strip below the item, then the full-height right column.
    assert_eq!((first.x, first.y, first.w, first.h), (0, 80, 120, 320));
    assert_eq!((second.x, second.y, second.w, second.h), (120, 0, 280, 400));

    assert_eq!(region.fills.len(), 1);
    assert_eq!(region.fills[0].key, "a");
    assert_eq!(region.splits.len(), 2);
    assert_eq!(geometry(&region.splits[0]), (0, 80, 120, 320));
    assert_eq!(geometry(&region.splits[1]), (120, 0, 280, 400));
}

#[test]
fn horizontal_top_left_placement_is_the_transpose() {
    let mut region: Region<String> = Region::new(0, 0, 400, 400);
    let item = Placement::new("a".to_string(), 0, 0, 100, 50);

    let (first, second) = region
        .split_on_axis(item, Axis::Horizontal)
        .expect("in-bounds placement");
    // Same-band strip right of the item, then the full-width bottom row.
    assert_eq!((first.x, first.y, first.w, first.h), (100, 0, 300, 50));
    assert_eq!((second.x, second.y, second.w, second.h), (0, 50, 400, 350));
}

#[test]
fn vertical_right_corner_orders_opposite_column_first() {
    let mut region: Region<String> = Region::new(0, 0, 400, 400);
    let item = Placement::new("a".to_string(), 300, 0, 100, 100);

    let (first, second) = region
        .split_on_axis(item, Axis::Vertical)
        .expect("in-bounds placement");
    assert_eq!((first.x, first.y, first.w, first.h), (0, 0, 300, 400));
    assert_eq!((second.x, second.y, second.w, second.h), (300, 100, 100, 300));
}

#[test]
fn horizontal_bottom_corner_orders_opposite_row_first() {
    let mut region: Region<String> = Region::new(0, 0, 400, 400);
    let item = Placement::new("a".to_string(), 0, 300, 200, 100);

    let (first, second) = region
        .split_on_axis(item, Axis::Horizontal)
        .expect("in-bounds placement");
    assert_eq!((first.x, first.y, first.w, first.h), (0, 0, 400, 300));
    assert_eq!((second.x, second.y, second.w, second.h), (200, 300, 200, 100));
}

#[test]
fn exact_fill_still_produces_two_zero_area_splits() {
    let mut region: Region<String> = Region::new(0, 0, 400, 400);
    let item = Placement::new("a".to_string(), 0, 0, 400, 400);

    region
        .split_on_axis(item, Axis::Vertical)
        .expect("exact fit is in bounds");
    assert_eq!(region.splits.len(), 2);
    assert!(region.splits.iter().all(|s| s.area() == 0));
}

#[test]
fn out_of_bounds_fails_without_mutation() {
    let mut region: Region<String> = Region::new(0, 0, 400, 400);
    let item = Placement::new("wide".to_string(), 0, 0, 500, 100);

    let err = region
        .split_on_axis(item, Axis::Vertical)
        .expect_err("500 wide cannot fit a 400 wide region");
    match err {
        TilifyError::Bounds {
            w, h, region_w, region_h, ..
        } => {
            assert_eq!((w, h), (500, 100));
            assert_eq!((region_w, region_h), (400, 400));
        }
        other => panic!("expected Bounds error, got {other:?}"),
    }
    assert!(region.fills.is_empty());
    assert!(region.splits.is_empty());
}

#[test]
fn overflow_in_y_is_also_rejected() {
    let mut region: Region<String> = Region::new(0, 0, 400, 400);
    let item = Placement::new("tall".to_string(), 0, 350, 100, 100);

    assert!(region.split_on_axis(item, Axis::Horizontal).is_err());
    assert!(region.fills.is_empty());
    assert!(region.splits.is_empty());
}
