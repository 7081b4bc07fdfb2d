use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.convergence_distance, 1);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg: EngineConfig =
        serde_json::from_str(r#"{ "max_lines": 10, "viewport": { "width": 64, "height": 32 } }"#)
            .unwrap();
    assert_eq!(cfg.max_lines, 10);
    assert_eq!(cfg.viewport, Viewport::new(64, 32).unwrap());
    assert_eq!(cfg.max_steps, EngineConfig::default().max_steps);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<EngineConfig>(r#"{ "max_line": 10 }"#).is_err());
}

#[test]
fn validate_rejects_zero_budgets() {
    let cfg = EngineConfig {
        max_lines: 0,
        ..EngineConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = EngineConfig {
        max_steps: 0,
        ..EngineConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = EngineConfig {
        viewport: Viewport {
            width: 0,
            height: 10,
        },
        ..EngineConfig::default()
    };
    assert!(cfg.validate().is_err());
}
