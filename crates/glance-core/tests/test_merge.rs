use glance_core::geometry::BoundingBox;
use glance_core::oracle::RecognizedItem;
use glance_core::overlay::{merge, spatial_sort, MergeConfig};

fn items(n: usize) -> Vec<RecognizedItem> {
    (0..n)
        .map(|i| RecognizedItem::new(format!("t{i}"), format!("tr{i}")))
        .collect()
}

const FRAME_W: f64 = 1000.0;
const FRAME_H: f64 = 800.0;

fn fallback_box() -> BoundingBox {
    BoundingBox::new(100.0, 700.0, 800.0, 80.0)
}

#[test]
fn test_matched_items_follow_reading_order() {
    // Given out of order: second row, then the right box of the first row.
    let boxes = vec![
        BoundingBox::new(50.0, 300.0, 100.0, 40.0),
        BoundingBox::new(400.0, 110.0, 100.0, 40.0),
        BoundingBox::new(60.0, 100.0, 100.0, 40.0),
    ];
    let results = merge(boxes, items(3), FRAME_W, FRAME_H, &MergeConfig::default());

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].text, "t0");
    assert_eq!(results[0].bbox.x, 60.0);
    assert_eq!(results[1].bbox.x, 400.0);
    assert_eq!(results[2].bbox.y, 300.0);
    assert!(results.iter().all(|r| !r.is_fallback && !r.loading && r.visible));
}

#[test]
fn test_orphans_use_fallback_layout() {
    let boxes = vec![
        BoundingBox::new(10.0, 10.0, 50.0, 20.0),
        BoundingBox::new(10.0, 200.0, 50.0, 20.0),
    ];
    let results = merge(boxes, items(4), FRAME_W, FRAME_H, &MergeConfig::default());

    assert_eq!(results.len(), 4);
    assert!(!results[0].is_fallback);
    assert!(!results[1].is_fallback);
    for orphan in &results[2..] {
        assert!(orphan.is_fallback);
        assert_eq!(orphan.bbox, fallback_box());
    }
    assert_eq!(results[3].translation, "tr3");
}

#[test]
fn test_extra_boxes_are_ignored() {
    let boxes = vec![
        BoundingBox::new(10.0, 10.0, 50.0, 20.0),
        BoundingBox::new(10.0, 200.0, 50.0, 20.0),
        BoundingBox::new(10.0, 400.0, 50.0, 20.0),
    ];
    let results = merge(boxes, items(2), FRAME_W, FRAME_H, &MergeConfig::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].bbox.y, 200.0);
}

#[test]
fn test_no_boxes_means_all_fallback() {
    let results = merge(Vec::new(), items(3), FRAME_W, FRAME_H, &MergeConfig::default());
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.is_fallback && r.bbox == fallback_box()));
}

#[test]
fn test_no_items_means_no_results() {
    let boxes = vec![BoundingBox::new(10.0, 10.0, 50.0, 20.0)];
    assert!(merge(boxes, Vec::new(), FRAME_W, FRAME_H, &MergeConfig::default()).is_empty());
}

#[test]
fn test_single_matched_result_is_forced_to_fallback() {
    let boxes = vec![BoundingBox::new(10.0, 10.0, 50.0, 20.0)];
    let results = merge(boxes, items(1), FRAME_W, FRAME_H, &MergeConfig::default());
    assert_eq!(results.len(), 1);
    assert!(results[0].is_fallback);
    // Keeps its detected box; only the flag changes.
    assert_eq!(results[0].bbox, BoundingBox::new(10.0, 10.0, 50.0, 20.0));
}

#[test]
fn test_spatial_sort_is_independent_of_input_order() {
    let original = vec![
        BoundingBox::new(300.0, 0.0, 10.0, 10.0),
        BoundingBox::new(0.0, 30.0, 10.0, 10.0),
        BoundingBox::new(150.0, 60.0, 10.0, 10.0),
        BoundingBox::new(20.0, 90.0, 10.0, 10.0),
        BoundingBox::new(500.0, 200.0, 10.0, 10.0),
    ];
    let mut a = original.clone();
    let mut b: Vec<BoundingBox> = original.into_iter().rev().collect();
    spatial_sort(&mut a, 50.0);
    spatial_sort(&mut b, 50.0);
    assert_eq!(a, b);
    let xs: Vec<f64> = a.iter().map(|b| b.x).collect();
    assert_eq!(xs, vec![0.0, 300.0, 20.0, 150.0, 500.0]);
}
