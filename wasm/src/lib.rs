//! Maintenance Calories WASM Module
//!
//! Browser bindings for the calculator: per-field validation, the full
//! calculation and the chart data sets. Values cross the boundary as JSON
//! strings; failures surface as thrown string errors.

use calorie_planner_shared::types::CalculatorForm;
use calorie_planner_shared::validation::{parse_form, validate_form_fields};
use calorie_planner_shared::{calculate_results, classify_bmi, Gender, MetricsResults};
use wasm_bindgen::prelude::*;

pub mod charts;

/// Validate the raw form values and list every failing field
///
/// `form_json` is an object of the input strings keyed by field name.
/// Returns a JSON array of `{field, kind, message, display_label}`; empty
/// when the form is valid.
#[wasm_bindgen]
pub fn validate_form(form_json: &str) -> Result<String, JsValue> {
    validate_form_json(form_json).map_err(into_js)
}

/// Validate the form and run the whole calculation
///
/// Returns the serialized results record, or throws the first field error.
#[wasm_bindgen]
pub fn calculate(form_json: &str) -> Result<String, JsValue> {
    calculate_json(form_json).map_err(into_js)
}

/// Calorie breakdown chart for a serialized results record
#[wasm_bindgen]
pub fn calorie_chart(results_json: &str) -> Result<String, JsValue> {
    chart_json(results_json, charts::calorie_breakdown).map_err(into_js)
}

/// Macro distribution chart for a serialized results record
#[wasm_bindgen]
pub fn macro_chart(results_json: &str) -> Result<String, JsValue> {
    chart_json(results_json, |r| charts::macro_distribution(&r.macros)).map_err(into_js)
}

/// Calculate BMI from height (cm) and weight (kg), rounded to one decimal
#[wasm_bindgen]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, JsValue> {
    calorie_planner_shared::calculate_bmi(height_cm, weight_kg).map_err(|e| into_js(e.to_string()))
}

/// Calculate BMR with the Mifflin-St Jeor equation
#[wasm_bindgen]
pub fn calculate_bmr(
    height_cm: f64,
    weight_kg: f64,
    age_years: u32,
    gender: &str,
) -> Result<f64, JsValue> {
    calorie_planner_shared::calculate_bmr(height_cm, weight_kg, age_years, Gender::from_form_value(gender))
        .map_err(|e| into_js(e.to_string()))
}

/// Human-readable BMI category
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    classify_bmi(bmi).label().to_string()
}

fn into_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn parse_form_json(form_json: &str) -> Result<CalculatorForm, String> {
    serde_json::from_str(form_json).map_err(|e| format!("Invalid form data: {}", e))
}

fn validate_form_json(form_json: &str) -> Result<String, String> {
    let form = parse_form_json(form_json)?;
    serde_json::to_string(&validate_form_fields(&form)).map_err(|e| e.to_string())
}

fn calculate_json(form_json: &str) -> Result<String, String> {
    let form = parse_form_json(form_json)?;
    let input = parse_form(&form).map_err(|e| e.user_message())?;
    let results = calculate_results(&input).map_err(|e| e.to_string())?;
    serde_json::to_string(&results).map_err(|e| e.to_string())
}

fn chart_json<F>(results_json: &str, build: F) -> Result<String, String>
where
    F: FnOnce(&MetricsResults) -> charts::ChartData,
{
    let results: MetricsResults =
        serde_json::from_str(results_json).map_err(|e| format!("Invalid results data: {}", e))?;
    serde_json::to_string(&build(&results)).map_err(|e| e.to_string())
}
