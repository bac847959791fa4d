use glance_core::config::{ManualPlacement, OverlayConfig};
use glance_core::detect::LumaMode;

#[test]
fn test_defaults() {
    let config = OverlayConfig::default();
    assert_eq!(config.target_language, "English");
    assert_eq!(config.auto_jpeg_quality, 85);
    assert_eq!(config.manual.jpeg_quality, 95);
    assert_eq!(config.manual.placement, ManualPlacement::Below);
    assert_eq!(config.manual.gap, 5.0);
    assert_eq!(config.manual.result_height, 60.0);
    assert_eq!(config.detector.tile_size, 20);
    assert_eq!(config.detector.process_scale, 0.5);
    assert_eq!(config.detector.edge_threshold, 15.0);
    assert_eq!(config.detector.busy_ratio, 0.05);
    assert_eq!(config.merge.row_tolerance, 50.0);
    assert_eq!(config.merge.fallback.height, 80.0);
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config: OverlayConfig = toml::from_str("").unwrap();
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn test_partial_toml_overrides_only_named_fields() {
    let config: OverlayConfig = toml::from_str(
        r#"
        target_language = "German"

        [manual]
        placement = "over"

        [detector]
        tile_size = 16
        luma = "bt601"

        [merge.fallback]
        bottom_offset = 120.0
        "#,
    )
    .unwrap();
    assert_eq!(config.target_language, "German");
    assert_eq!(config.manual.placement, ManualPlacement::Over);
    assert_eq!(config.manual.gap, 5.0);
    assert_eq!(config.detector.tile_size, 16);
    assert_eq!(config.detector.luma, LumaMode::Bt601);
    assert_eq!(config.detector.edge_threshold, 15.0);
    assert_eq!(config.merge.fallback.bottom_offset, 120.0);
    assert_eq!(config.merge.fallback.x_fraction, 0.1);
}

#[test]
fn test_toml_round_trip() {
    let config = OverlayConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let back: OverlayConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_out_of_range_scale_falls_back_to_full_resolution() {
    let config: OverlayConfig = toml::from_str("[detector]\nprocess_scale = 4.0").unwrap();
    assert_eq!(config.detector.effective_scale(), 1.0);
}
