//! Input validation for the calculator
//!
//! Both front ends run the same checks. The server reports the first failing
//! field as a single message; the interactive page asks for every failure so
//! it can mark each offending input.

use crate::health_metrics::{Gender, Goal, MetricsInput};
use crate::types::{CalculateRequest, CalculatorForm};
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Field Ranges
// ============================================================================

/// Inclusive numeric domain of one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    /// Unit suffix used in messages, e.g. " cm"
    pub unit: &'static str,
}

pub const HEIGHT_RANGE: FieldRange = FieldRange { field: "height", min: 100.0, max: 250.0, unit: " cm" };
pub const WEIGHT_RANGE: FieldRange = FieldRange { field: "weight", min: 30.0, max: 300.0, unit: " kg" };
pub const AGE_RANGE: FieldRange = FieldRange { field: "age", min: 15.0, max: 100.0, unit: " years" };
pub const DAYS_RANGE: FieldRange = FieldRange { field: "days", min: 1.0, max: 7.0, unit: "" };
pub const HOURS_RANGE: FieldRange = FieldRange { field: "hours", min: 0.5, max: 4.0, unit: "" };

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check a real-valued field
    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::malformed(self.field));
        }
        if !self.contains(value) {
            return Err(ValidationError::new(
                self.field,
                ValidationErrorKind::OutOfRange,
                &format!("must be between {} and {}{}", self.min, self.max, self.unit),
            ));
        }
        Ok(value)
    }

    /// Check a field that must hold a whole number
    pub fn check_whole(&self, value: f64) -> Result<u32, ValidationError> {
        if value.is_finite() && value.fract() != 0.0 {
            return Err(ValidationError::new(
                self.field,
                ValidationErrorKind::Malformed,
                "must be a whole number",
            ));
        }
        self.check(value).map(|v| v as u32)
    }
}

/// Activity multipliers are open-ended but must be usable as a factor
pub fn check_activity_level(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::malformed("activityLevel"));
    }
    if value <= 0.0 {
        return Err(ValidationError::new(
            "activityLevel",
            ValidationErrorKind::OutOfRange,
            "must be a positive number",
        ));
    }
    Ok(value)
}

/// Gender must be present; any value other than exactly `male` uses the
/// non-male equation
pub fn check_gender(value: Option<&str>) -> Result<Gender, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(Gender::from_form_value(v)),
        _ => Err(ValidationError::missing("gender")),
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map form field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "height" => "Height",
        "weight" => "Weight",
        "age" => "Age",
        "gender" => "Gender",
        "activityLevel" | "activity_level" => "Activity level",
        "days" => "Days",
        "hours" => "Hours",
        "goal" => "Goal",
        _ => field_name,
    }
}

/// What went wrong with a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    Missing,
    Malformed,
    OutOfRange,
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{display_label} {message}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, kind: ValidationErrorKind, message: &str) -> Self {
        Self {
            field: field.to_string(),
            kind,
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, ValidationErrorKind::Missing, "is required")
    }

    pub fn malformed(field: &str) -> Self {
        Self::new(field, ValidationErrorKind::Malformed, "must be a valid number")
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Form and Request Validation
// ============================================================================

/// Parse one numeric form value
pub fn read_number(field: &str, raw: Option<&str>) -> Result<f64, ValidationError> {
    let raw = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ValidationError::missing(field)),
    };
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::malformed(field))
}

fn keep<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Per-field outcomes in form order
struct CheckedFields {
    height: Result<f64, ValidationError>,
    weight: Result<f64, ValidationError>,
    age: Result<u32, ValidationError>,
    gender: Result<Gender, ValidationError>,
    activity_level: Result<f64, ValidationError>,
    days: Result<u32, ValidationError>,
    hours: Result<f64, ValidationError>,
    goal: Goal,
}

impl CheckedFields {
    fn from_form(form: &CalculatorForm) -> Self {
        Self {
            height: read_number("height", form.height.as_deref()).and_then(|v| HEIGHT_RANGE.check(v)),
            weight: read_number("weight", form.weight.as_deref()).and_then(|v| WEIGHT_RANGE.check(v)),
            age: read_number("age", form.age.as_deref()).and_then(|v| AGE_RANGE.check_whole(v)),
            gender: check_gender(form.gender.as_deref()),
            activity_level: read_number("activityLevel", form.activity_level.as_deref())
                .and_then(check_activity_level),
            days: read_number("days", form.days.as_deref()).and_then(|v| DAYS_RANGE.check_whole(v)),
            hours: read_number("hours", form.hours.as_deref()).and_then(|v| HOURS_RANGE.check(v)),
            goal: Goal::from_form_value(form.goal.as_deref()),
        }
    }

    fn from_request(req: &CalculateRequest) -> Self {
        Self {
            height: HEIGHT_RANGE.check(req.height),
            weight: WEIGHT_RANGE.check(req.weight),
            age: AGE_RANGE.check_whole(req.age),
            gender: check_gender(Some(req.gender.as_str())),
            activity_level: check_activity_level(req.activity_level),
            days: DAYS_RANGE.check_whole(req.days),
            hours: HOURS_RANGE.check(req.hours),
            goal: Goal::from_form_value(req.goal.as_deref()),
        }
    }

    /// Assemble the engine input or return every failure
    fn into_input(self) -> Result<MetricsInput, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let height = keep(&mut errors, self.height);
        let weight = keep(&mut errors, self.weight);
        let age = keep(&mut errors, self.age);
        let gender = keep(&mut errors, self.gender);
        let activity_level = keep(&mut errors, self.activity_level);
        let days = keep(&mut errors, self.days);
        let hours = keep(&mut errors, self.hours);

        match (height, weight, age, gender, activity_level, days, hours) {
            (Some(height), Some(weight), Some(age), Some(gender), Some(activity), Some(days), Some(hours)) => {
                Ok(MetricsInput {
                    height_cm: height,
                    weight_kg: weight,
                    age_years: age,
                    gender,
                    activity_level: activity,
                    goal: self.goal,
                    days_per_week: days,
                    hours_per_session: hours,
                })
            }
            _ => Err(errors),
        }
    }
}

fn first_error(errors: Vec<ValidationError>) -> ValidationError {
    errors
        .into_iter()
        .next()
        .unwrap_or_else(|| ValidationError::new("form", ValidationErrorKind::Malformed, "could not be read"))
}

/// Validate a submitted form, stopping at the first failing field
pub fn parse_form(form: &CalculatorForm) -> Result<MetricsInput, ValidationError> {
    CheckedFields::from_form(form).into_input().map_err(first_error)
}

/// Validate a submitted form and report every failing field
pub fn validate_form_fields(form: &CalculatorForm) -> Vec<ValidationError> {
    CheckedFields::from_form(form).into_input().err().unwrap_or_default()
}

/// Validate a JSON request, stopping at the first failing field
pub fn validate_request(req: &CalculateRequest) -> Result<MetricsInput, ValidationError> {
    CheckedFields::from_request(req).into_input().map_err(first_error)
}
