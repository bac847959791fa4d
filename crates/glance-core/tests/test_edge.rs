use approx::assert_abs_diff_eq;

use glance_core::viewport::{edge_position, Edge, Rotation, ViewMode, ViewState};

#[test]
fn test_edges_are_symmetric() {
    for &mode in ViewMode::ALL {
        for degrees in [0, 90, 180, 270] {
            let state = ViewState::new(1200.0, 3000.0, 800.0, 600.0, mode)
                .with_rotation(Rotation::from_degrees(degrees).unwrap());
            assert_eq!(
                edge_position(Edge::Top, &state),
                -edge_position(Edge::Bottom, &state)
            );
            assert_eq!(
                edge_position(Edge::Left, &state),
                -edge_position(Edge::Right, &state)
            );
        }
    }
}

#[test]
fn test_reader_tall_page_overflows_vertically() {
    // Fit-width scale 800/1200; drawn height 2000 against a 600 px window.
    let state = ViewState::new(1200.0, 3000.0, 800.0, 600.0, ViewMode::Reader);
    assert_abs_diff_eq!(edge_position(Edge::Top, &state), 700.0, epsilon = 1e-9);
    assert_abs_diff_eq!(edge_position(Edge::Bottom, &state), -700.0, epsilon = 1e-9);
    assert_eq!(edge_position(Edge::Left, &state), 0.0);
}

#[test]
fn test_rotation_swaps_overflow_axis() {
    let state = ViewState::new(1000.0, 200.0, 400.0, 400.0, ViewMode::Original);
    assert_abs_diff_eq!(edge_position(Edge::Left, &state), 300.0, epsilon = 1e-9);
    assert_eq!(edge_position(Edge::Top, &state), 0.0);

    let rotated = state.with_rotation(Rotation::Deg90);
    assert_abs_diff_eq!(edge_position(Edge::Top, &rotated), 300.0, epsilon = 1e-9);
    assert_eq!(edge_position(Edge::Left, &rotated), 0.0);
}

#[test]
fn test_edge_ignores_zoom() {
    let state = ViewState::new(1200.0, 3000.0, 800.0, 600.0, ViewMode::Reader);
    let zoomed = state.clone().with_zoom(3.0);
    assert_eq!(
        edge_position(Edge::Top, &state),
        edge_position(Edge::Top, &zoomed)
    );
}

#[test]
fn test_degenerate_edge_is_zero() {
    let state = ViewState::new(0.0, 0.0, 800.0, 600.0, ViewMode::Reader);
    for &edge in Edge::ALL {
        assert_eq!(edge_position(edge, &state), 0.0);
    }
}

#[test]
fn test_edge_parses_from_str() {
    assert_eq!("bottom".parse::<Edge>().unwrap(), Edge::Bottom);
    assert!("middle".parse::<Edge>().is_err());
}
