//! Chart data sets for the results view
//!
//! The host page owns the chart instances and recreates them for every
//! result; this module only produces the data they are drawn from.

use calorie_planner_shared::{MacroBreakdown, Macronutrient, MetricsResults};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Pie,
}

/// One chart's worth of labelled slices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub title: &'static str,
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

/// BMR against the calories added by activity
pub fn calorie_breakdown(results: &MetricsResults) -> ChartData {
    let activity = results.maintenance_calories - results.bmr;
    ChartData {
        kind: ChartKind::Doughnut,
        title: "Calorie Breakdown",
        labels: vec!["BMR", "Activity Calories"],
        values: vec![results.bmr as f64, activity as f64],
        colors: vec!["#3498db", "#e74c3c"],
    }
}

fn macro_color(nutrient: Macronutrient) -> &'static str {
    match nutrient {
        Macronutrient::Protein => "#dc3545",
        Macronutrient::Carbs => "#ffc107",
        Macronutrient::Fat => "#28a745",
    }
}

/// Percentage split of the three macronutrients
pub fn macro_distribution(macros: &MacroBreakdown) -> ChartData {
    ChartData {
        kind: ChartKind::Pie,
        title: "Macro Distribution",
        labels: Macronutrient::ALL.iter().map(|m| m.label()).collect(),
        values: Macronutrient::ALL
            .iter()
            .map(|&m| macros.get(m).percentage as f64)
            .collect(),
        colors: Macronutrient::ALL.iter().map(|&m| macro_color(m)).collect(),
    }
}
