//! Validation for tuning values loaded from content files.

use super::data::MovementParams;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub requirement: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}' is {} but must be {}",
            self.source_type, self.field, self.value, self.requirement
        )
    }
}

/// Helper macro for checking a field lies in an inclusive range.
/// Written as a negated comparison so NaN is rejected too.
macro_rules! check_range {
    ($errors:expr, $params:expr, $field:ident, $min:expr, $max:expr) => {
        let value = $params.$field;
        if !(value >= $min && value <= $max) {
            $errors.push(ValidationError {
                source_type: "Movement",
                field: stringify!($field),
                value,
                requirement: format!("within [{}, {}]", $min, $max),
            });
        }
    };
}

macro_rules! check_non_negative {
    ($errors:expr, $params:expr, $field:ident) => {
        let value = $params.$field;
        if !(value >= 0.0) {
            $errors.push(ValidationError {
                source_type: "Movement",
                field: stringify!($field),
                value,
                requirement: "non-negative".to_string(),
            });
        }
    };
}

macro_rules! check_positive {
    ($errors:expr, $params:expr, $field:ident) => {
        let value = $params.$field;
        if !(value > 0.0) {
            $errors.push(ValidationError {
                source_type: "Movement",
                field: stringify!($field),
                value,
                requirement: "positive".to_string(),
            });
        }
    };
}

/// Validate movement tuning.
/// Returns a list of validation errors, empty if every field is usable.
pub fn validate_movement(params: &MovementParams) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Gravity
    check_positive!(errors, params, world_gravity);
    check_non_negative!(errors, params, fall_gravity_mult);
    check_non_negative!(errors, params, max_fall_speed);
    check_non_negative!(errors, params, fast_fall_gravity_mult);
    check_non_negative!(errors, params, max_fast_fall_speed);

    // Run
    check_positive!(errors, params, run_max_speed);
    check_non_negative!(errors, params, run_acceleration);
    check_non_negative!(errors, params, run_decceleration);
    check_range!(errors, params, accel_in_air, 0.0, 1.0);
    check_range!(errors, params, deccel_in_air, 0.0, 1.0);

    // Jump
    check_positive!(errors, params, jump_height);
    check_positive!(errors, params, jump_time_to_apex);
    check_non_negative!(errors, params, jump_cut_gravity_mult);
    check_range!(errors, params, jump_hang_gravity_mult, 0.0, 1.0);
    check_non_negative!(errors, params, jump_hang_time_threshold);
    check_non_negative!(errors, params, jump_hang_acceleration_mult);
    check_non_negative!(errors, params, jump_hang_max_speed_mult);

    // Assists
    check_range!(errors, params, coyote_time, 0.01, 0.5);
    check_range!(errors, params, jump_input_buffer_time, 0.01, 0.5);
    check_range!(errors, params, grab_input_buffer_time, 0.01, 0.5);

    // Grab
    check_non_negative!(errors, params, grab_sleep_time);

    errors
}
