use crate::{RecorderConfig, Viewport};

/// WHAT: Numeric viewport fields with surrounding spaces are accepted
/// WHY: Fields come straight from user input
#[test]
fn given_padded_numeric_fields_when_reading_viewport_then_parsed() {
    // Given: Padded numeric fields
    let cfg = RecorderConfig {
        viewport_width: " 1280 ".to_string(),
        viewport_height: "720".to_string(),
        ..RecorderConfig::default()
    };

    // When/Then: Viewport is usable
    assert_eq!(
        cfg.viewport(),
        Some(Viewport {
            width: 1280,
            height: 720
        })
    );
}

/// WHAT: A single unusable field disables the whole viewport
/// WHY: The recorder needs both dimensions
#[test]
fn given_one_invalid_field_when_reading_viewport_then_none() {
    // Given: A valid width and a garbage height
    let cfg = RecorderConfig {
        viewport_width: "1280".to_string(),
        viewport_height: "7two0".to_string(),
        ..RecorderConfig::default()
    };

    // When/Then: No viewport
    assert_eq!(cfg.viewport(), None);
}

/// WHAT: Defaults match the values the user sees on first launch
/// WHY: An empty config file must still produce a usable recording
#[test]
fn given_defaults_when_reading_then_example_site_at_full_hd() {
    let cfg = RecorderConfig::default();

    assert_eq!(cfg.target_url(), "https://example.com");
    assert_eq!(cfg.locale, "en-US");
    assert!(!cfg.headless);
    assert_eq!(
        cfg.viewport(),
        Some(Viewport {
            width: 1920,
            height: 1080
        })
    );
}
