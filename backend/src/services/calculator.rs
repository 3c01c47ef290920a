//! Calculator service - validation and engine invocation for one submission

use crate::error::ApiError;
use calorie_planner_shared::types::{CalculateRequest, CalculatorForm};
use calorie_planner_shared::validation::{parse_form, validate_request, ValidationError};
use calorie_planner_shared::{calculate_results, MetricsInput, MetricsResults};
use tracing::debug;

/// Calculator service
pub struct CalculatorService;

impl CalculatorService {
    /// Validate an HTML form post and compute its results
    pub fn calculate_form(form: &CalculatorForm) -> Result<(MetricsInput, MetricsResults), ApiError> {
        let input = parse_form(form).map_err(Self::rejected)?;
        let results = Self::run(&input)?;
        Ok((input, results))
    }

    /// Validate a JSON request and compute its results
    pub fn calculate_request(req: &CalculateRequest) -> Result<(MetricsInput, MetricsResults), ApiError> {
        let input = validate_request(req).map_err(Self::rejected)?;
        let results = Self::run(&input)?;
        Ok((input, results))
    }

    fn rejected(err: ValidationError) -> ApiError {
        metrics::counter!("calculator_rejections_total", "field" => err.field.clone()).increment(1);
        ApiError::Validation(err)
    }

    fn run(input: &MetricsInput) -> Result<MetricsResults, ApiError> {
        let results = calculate_results(input)?;
        metrics::counter!("calculations_total", "goal" => input.goal.as_str()).increment(1);
        debug!(
            goal = %input.goal,
            days = input.days_per_week,
            target_calories = results.target_calories,
            "Calculated calorie targets"
        );
        Ok(results)
    }
}
