use crate::carwash::{
    ConfigError, DEFAULT_HORIZON, DEFAULT_WASH_DURATION, IntervalSource, ScenarioConfig,
};

#[test]
fn defaults_match_reference_scenario() {
    let cfg = ScenarioConfig::default();
    assert_eq!(cfg.min_interval, 1.0);
    assert_eq!(cfg.max_interval, 5.0);
    assert_eq!(cfg.wash_duration, DEFAULT_WASH_DURATION);
    assert_eq!(cfg.horizon, DEFAULT_HORIZON);
    assert_eq!(cfg.sample_interval, 1.0);
    assert!(cfg.intervals.is_none());
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let raw = r#"{ "wash_duration": 4.5, "seed": 9, "intervals": [2, 4, 1] }"#;
    let cfg: ScenarioConfig = serde_json::from_str(raw).expect("parse config");
    assert_eq!(cfg.wash_duration, 4.5);
    assert_eq!(cfg.seed, 9);
    assert_eq!(cfg.horizon, DEFAULT_HORIZON);
    assert_eq!(cfg.intervals.as_deref(), Some(&[2.0, 4.0, 1.0][..]));
}

#[test]
fn fixed_intervals_replace_random_source() {
    let cfg = ScenarioConfig {
        intervals: Some(vec![2.0, 4.0, 1.0]),
        ..ScenarioConfig::default()
    };
    let src = cfg.interval_source().expect("source");
    assert!(matches!(src, IntervalSource::Fixed(_)));
    assert_eq!(src.collect::<Vec<_>>(), vec![2.0, 4.0, 1.0]);
}

#[test]
fn invalid_fixed_interval_is_reported_with_index() {
    let cfg = ScenarioConfig {
        intervals: Some(vec![2.0, -1.0]),
        ..ScenarioConfig::default()
    };
    match cfg.interval_source() {
        Err(ConfigError::FixedInterval { index, value }) => {
            assert_eq!(index, 1);
            assert_eq!(value, -1.0);
        }
        other => panic!("expected FixedInterval error, got {other:?}"),
    }
}

#[test]
fn uniform_source_is_seeded_and_bounded() {
    let cfg = ScenarioConfig {
        seed: 3,
        ..ScenarioConfig::default()
    };
    let a: Vec<f64> = cfg.interval_source().expect("source").take(50).collect();
    let b: Vec<f64> = cfg.interval_source().expect("source").take(50).collect();
    assert_eq!(a, b);
    assert!(a.iter().all(|x| (1.0..=5.0).contains(x)));

    let other = ScenarioConfig {
        seed: 4,
        ..ScenarioConfig::default()
    };
    let c: Vec<f64> = other.interval_source().expect("source").take(50).collect();
    assert_ne!(a, c);
}

#[test]
fn empty_or_inverted_range_is_rejected() {
    for (min, max) in [(5.0, 1.0), (0.0, 1.0), (1.0, f64::INFINITY)] {
        let cfg = ScenarioConfig {
            min_interval: min,
            max_interval: max,
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            cfg.interval_source(),
            Err(ConfigError::IntervalRange { .. })
        ));
    }
}

#[test]
fn missing_config_file_is_an_io_error() {
    let path = std::env::temp_dir().join("carwash-sim-does-not-exist.json");
    assert!(matches!(
        ScenarioConfig::from_json_file(&path),
        Err(ConfigError::Io { .. })
    ));
}
