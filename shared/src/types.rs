//! API request and response types

use serde::{Deserialize, Serialize};

/// Calculator form exactly as submitted
///
/// Every field arrives as text (HTML form post or DOM input values) and may
/// be missing; `validation::parse_form` turns it into a `MetricsInput`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, rename = "activityLevel", alias = "activity_level")]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub days: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
}

/// JSON calculation request
///
/// Age and days are carried as numbers and checked for whole values during
/// validation so that `30.0` and `30` behave the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub height: f64,
    pub weight: f64,
    pub age: f64,
    pub gender: String,
    #[serde(alias = "activityLevel")]
    pub activity_level: f64,
    pub days: f64,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_accepts_camel_case_activity_level() {
        let form: CalculatorForm =
            serde_json::from_str(r#"{"height":"180","activityLevel":"1.55"}"#).unwrap();
        assert_eq!(form.height.as_deref(), Some("180"));
        assert_eq!(form.activity_level.as_deref(), Some("1.55"));
        assert!(form.goal.is_none());
    }

    #[test]
    fn test_request_accepts_either_activity_key() {
        let body = r#"{"height":180,"weight":80,"age":30,"gender":"male",
            "activityLevel":1.55,"days":3,"hours":1}"#;
        let req: CalculateRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.activity_level, 1.55);
        assert!(req.goal.is_none());

        let body = body.replace("activityLevel", "activity_level");
        let req: CalculateRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(req.activity_level, 1.55);
    }

    #[test]
    fn test_error_detail_omits_missing_field() {
        let json = serde_json::to_string(&ErrorResponse {
            error: ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message: "Height is required".to_string(),
                field: None,
            },
        })
        .unwrap();
        assert!(!json.contains("field"));
    }
}
