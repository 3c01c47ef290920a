//! Calculator routes: HTML form post and JSON API

use crate::error::{ApiError, ApiResult, PageError};
use crate::render;
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    response::{Html, Redirect},
    routing::post,
    Form, Json, Router,
};
use calorie_planner_shared::types::{CalculateRequest, CalculatorForm};
use calorie_planner_shared::MetricsResults;

/// Create JSON calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_json))
}

/// POST /calculate - Render the results document for a form submission
///
/// Any validation failure renders the error document with status 400.
pub async fn calculate_page(
    form: Result<Form<CalculatorForm>, FormRejection>,
) -> Result<Html<String>, PageError> {
    let Form(form) = form.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (input, results) = CalculatorService::calculate_form(&form)?;
    Ok(Html(render::results_page(&input, &results)))
}

/// GET /calculate - The calculator lives on the index page
pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

/// POST /api/v1/calculate - Return the results record as JSON
async fn calculate_json(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<Json<MetricsResults>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (_, results) = CalculatorService::calculate_request(&req)?;
    Ok(Json(results))
}
