use std::sync::Arc;
use std::thread;

use glance_core::geometry::{BoundingBox, CoordSpace};
use glance_core::oracle::RecognizedItem;
use glance_core::overlay::{OverlayResult, OverlaySession};

fn bbox() -> BoundingBox {
    BoundingBox::new(1.0, 2.0, 3.0, 4.0)
}

#[test]
fn test_placeholder_is_loading_until_completed() {
    let session = OverlaySession::new();
    let ticket = session.begin_manual(bbox(), CoordSpace::Image);
    assert!(session.is_loading());
    let placeholder = &session.manual_results()[0];
    assert_eq!(placeholder.text, "Scanning...");
    assert_eq!(placeholder.translation, "Translating...");

    assert!(session.complete_manual(ticket, &Ok(RecognizedItem::new("a", "b"))));
    assert!(!session.is_loading());
    assert_eq!(session.manual_results()[0].translation, "b");
}

#[test]
fn test_completion_only_touches_its_own_slot() {
    let session = OverlaySession::new();
    let first = session.begin_manual(bbox(), CoordSpace::Image);
    let second = session.begin_manual(bbox(), CoordSpace::Image);

    session.complete_manual(second, &Err("boom".to_string()));
    let results = session.manual_results();
    assert!(results[0].loading);
    assert!(!results[1].loading);
    assert_eq!(results[1].translation, "Error: boom");

    session.complete_manual(first, &Ok(RecognizedItem::new("x", "y")));
    assert_eq!(session.manual_results()[0].text, "x");
}

#[test]
fn test_clear_discards_in_flight_manual_completion() {
    let session = OverlaySession::new();
    let ticket = session.begin_manual(bbox(), CoordSpace::Image);
    session.clear();
    let fresh = session.begin_manual(bbox(), CoordSpace::Display);

    assert_eq!(fresh.index, ticket.index);
    assert!(!session.complete_manual(ticket, &Ok(RecognizedItem::new("old", "old"))));
    let results = session.manual_results();
    assert_eq!(results.len(), 1);
    assert!(results[0].loading);
    assert_eq!(results[0].space, CoordSpace::Display);
}

#[test]
fn test_stale_auto_generation_is_discarded() {
    let session = OverlaySession::new();
    let stale = session.begin_auto(bbox());
    let current = session.begin_auto(bbox());
    assert_ne!(stale, current);

    let item = OverlayResult::matched(RecognizedItem::new("s", "s"), bbox());
    assert!(!session.finish_auto(stale, vec![item.clone()]));
    // Still showing the newer scan's placeholder.
    let auto = session.auto_results();
    assert_eq!(auto.len(), 1);
    assert!(auto[0].loading);

    assert!(session.finish_auto(current, vec![item.clone(), item]));
    assert_eq!(session.auto_results().len(), 2);
}

#[test]
fn test_clear_discards_in_flight_auto_scan() {
    let session = OverlaySession::new();
    let generation = session.begin_auto(bbox());
    session.clear();
    assert!(!session.finish_auto(generation, Vec::new()));
    assert!(session.results().is_empty());
}

#[test]
fn test_concurrent_manual_selections() {
    let session = Arc::new(OverlaySession::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                let ticket = session.begin_manual(bbox(), CoordSpace::Image);
                let item = RecognizedItem::new(format!("t{i}"), format!("r{i}"));
                assert!(session.complete_manual(ticket, &Ok(item)));
                ticket.index
            })
        })
        .collect();

    let mut indices: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..8).collect::<Vec<_>>());
    assert!(!session.is_loading());
    assert_eq!(session.manual_results().len(), 8);
}

#[test]
fn test_project_image_space_item_to_display() {
    use glance_core::viewport::{ViewMode, ViewState};

    let view = ViewState::new(400.0, 300.0, 800.0, 600.0, ViewMode::FitWidth);
    let item = OverlayResult::matched(RecognizedItem::new("a", "b"), BoundingBox::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(item.project(&view), BoundingBox::new(20.0, 40.0, 60.0, 80.0));

    let display = OverlayResult::placeholder(bbox(), CoordSpace::Display);
    assert_eq!(display.project(&view), bbox());
}
