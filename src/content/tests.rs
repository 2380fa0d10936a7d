//! Content domain: tests for RON parsing and tuning validation.

use std::path::Path;

use super::loader::parse_single;
use super::{MovementParams, load_movement_params, load_validated_movement, validate_movement};

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let params: MovementParams =
        parse_single("test", "(run_max_speed: 12.0, do_conserve_momentum: false)")
            .expect("partial tuning should parse");

    let defaults = MovementParams::default();
    assert_eq!(params.run_max_speed, 12.0);
    assert!(!params.do_conserve_momentum);
    assert_eq!(params.jump_height, defaults.jump_height);
    assert_eq!(params.coyote_time, defaults.coyote_time);
}

#[test]
fn test_empty_struct_is_default_tuning() {
    let params: MovementParams = parse_single("test", "()").expect("empty tuning should parse");
    assert_eq!(params, MovementParams::default());
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_single::<MovementParams>("movement.ron", "(run_max_speed: \"fast\")")
        .expect_err("a string is not a speed");

    assert_eq!(err.file, "movement.ron");
    assert!(err.to_string().contains("movement.ron"));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = load_movement_params(Path::new("does/not/exist"));
    assert!(result.is_err());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let params = load_validated_movement(Path::new("does/not/exist"));
    assert_eq!(params, MovementParams::default());
}

#[test]
fn test_shipped_tuning_loads_and_validates() {
    let params = load_movement_params(Path::new(super::DATA_DIR))
        .expect("assets/data/movement.ron should load");
    let errors = validate_movement(&params);
    assert!(errors.is_empty(), "validation errors: {:?}", errors);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_movement(&MovementParams::default()).is_empty());
}

#[test]
fn test_assist_windows_must_be_in_range() {
    let params = MovementParams {
        coyote_time: -0.1,
        jump_input_buffer_time: 2.0,
        ..MovementParams::default()
    };

    let errors = validate_movement(&params);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["coyote_time", "jump_input_buffer_time"]);
}

#[test]
fn test_air_multipliers_must_be_fractions() {
    let params = MovementParams {
        accel_in_air: 1.5,
        ..MovementParams::default()
    };

    let errors = validate_movement(&params);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "accel_in_air");
    assert!(errors[0].to_string().contains("within [0, 1]"));
}

#[test]
fn test_nan_is_rejected() {
    let params = MovementParams {
        jump_height: f32::NAN,
        grab_sleep_time: f32::NAN,
        ..MovementParams::default()
    };

    let errors = validate_movement(&params);
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_invalid_tuning_falls_back_to_defaults() {
    let dir = std::env::temp_dir().join(format!("madlibby-content-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    std::fs::write(dir.join("movement.ron"), "(world_gravity: 0.0, run_max_speed: 99.0)")
        .expect("write tuning");

    let params = load_validated_movement(&dir);
    assert_eq!(params, MovementParams::default());

    std::fs::write(dir.join("movement.ron"), "(run_max_speed: 99.0)").expect("write tuning");
    let params = load_validated_movement(&dir);
    assert_eq!(params.run_max_speed, 99.0);

    let _ = std::fs::remove_dir_all(&dir);
}
