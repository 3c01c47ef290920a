//! Server-rendered HTML documents
//!
//! The results page and the error page are plain strings assembled from the
//! engine output. Every interpolated value goes through `html_escape`.

use calorie_planner_shared::{Gender, Goal, MacroShare, Macronutrient, MetricsInput, MetricsResults};
use html_escape::{encode_double_quoted_attribute, encode_text};

const PAGE_TITLE: &str = "Maintenance Calories Calculator";

const HEAD_LINKS: &str = r#"    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
    <link rel="stylesheet" href="/style.css">"#;

const SUCCESS_TIPS: [&str; 5] = [
    "Start with lighter weights and focus on form",
    "Progressive overload: gradually increase weight/reps",
    "Allow 48-72 hours rest between training same muscles",
    "Stay consistent with your schedule",
    "Track your workouts for better progress",
];

/// Bootstrap styling of the goal banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalStyle {
    pub color: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
}

pub fn goal_style(goal: Goal) -> GoalStyle {
    match goal {
        Goal::Lose => GoalStyle { color: "danger", icon: "arrow-down", text: "Weight Loss Goal" },
        Goal::Maintain => GoalStyle { color: "success", icon: "equals", text: "Weight Maintenance" },
        Goal::Gain => GoalStyle { color: "info", icon: "arrow-up", text: "Weight Gain Goal" },
    }
}

fn macro_presentation(nutrient: Macronutrient) -> (&'static str, &'static str) {
    match nutrient {
        Macronutrient::Protein => ("danger", "drumstick-bite"),
        Macronutrient::Carbs => ("warning", "bread-slice"),
        Macronutrient::Fat => ("success", "bacon"),
    }
}

fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {PAGE_TITLE}</title>
{HEAD_LINKS}
</head>
<body>
{body}
</body>
</html>
"#,
        title = encode_text(title),
    )
}

fn calorie_card(results: &MetricsResults) -> String {
    let style = goal_style(results.goal);
    let maintenance = results.maintenance_calories;
    format!(
        r#"        <div class="col-lg-6">
            <div class="result-card shadow-sm h-100">
                <div class="card-header bg-primary text-white"><h5 class="mb-0"><i class="fas fa-fire me-2"></i>Calorie Breakdown</h5></div>
                <div class="card-body">
                    <div class="alert alert-{color} text-center mb-4"><i class="fas fa-{icon} me-2"></i><strong>{text}</strong></div>
                    <div class="row g-3 mb-4">
                        <div class="col-md-6"><div class="stat-box text-center p-3 bg-light rounded">
                            <div class="stat-number text-primary fs-2 fw-bold">{bmr}</div>
                            <div class="stat-label fw-semibold">Basal Metabolic Rate</div>
                            <small class="text-muted">Calories burned at rest</small>
                        </div></div>
                        <div class="col-md-6"><div class="stat-box text-center p-3 bg-light rounded">
                            <div class="stat-number text-success fs-2 fw-bold">{maintenance}</div>
                            <div class="stat-label fw-semibold">Maintenance Calories</div>
                            <small class="text-muted">To maintain current weight</small>
                        </div></div>
                    </div>
                    <h4 class="text-{color} mb-3 text-center">Your Target: {target} calories/day</h4>
                    <div class="row g-2">
                        <div class="col-md-4"><div class="mini-stat bg-danger-subtle text-center p-2 rounded"><strong>{lose}</strong><small class="d-block">Weight Loss</small></div></div>
                        <div class="col-md-4"><div class="mini-stat bg-success-subtle text-center p-2 rounded"><strong>{maintenance}</strong><small class="d-block">Maintenance</small></div></div>
                        <div class="col-md-4"><div class="mini-stat bg-info-subtle text-center p-2 rounded"><strong>{gain}</strong><small class="d-block">Weight Gain</small></div></div>
                    </div>
                    <div class="bmi-info mt-4 p-3 bg-light rounded text-center">
                        <strong>Your BMI: {bmi}</strong>
                        <small class="d-block text-muted">{category}</small>
                    </div>
                </div>
            </div>
        </div>
"#,
        color = style.color,
        icon = style.icon,
        text = style.text,
        bmr = results.bmr,
        target = results.target_calories,
        lose = maintenance + Goal::Lose.calorie_adjustment(),
        gain = maintenance + Goal::Gain.calorie_adjustment(),
        bmi = results.bmi,
        category = results.bmi_category.label(),
    )
}

fn workout_card(results: &MetricsResults) -> String {
    let plan = &results.workout_plan;
    let exercises: String = plan
        .exercises
        .iter()
        .map(|e| format!("                        <li class=\"mb-2\"><i class=\"fas fa-check text-success me-2\"></i>{}</li>\n", encode_text(e)))
        .collect();
    let tips: String = SUCCESS_TIPS
        .iter()
        .map(|t| format!("                        <li class=\"mb-1\">{}</li>\n", t))
        .collect();

    format!(
        r#"        <div class="col-lg-6">
            <div class="result-card shadow-sm h-100">
                <div class="card-header bg-success text-white"><h5 class="mb-0"><i class="fas fa-dumbbell me-2"></i>Recommended Workout Plan</h5></div>
                <div class="card-body">
                    <h4 class="text-success mb-3"><i class="fas fa-star me-2"></i>{name}</h4>
                    <p class="text-muted mb-3">{description}</p>
                    <p class="mb-3"><strong>Duration:</strong> {duration}</p>
                    <h6 class="text-primary mb-3">Weekly Schedule:</h6>
                    <ul class="list-unstyled">
{exercises}                    </ul>
                    <h6 class="text-primary mb-3">Success Tips:</h6>
                    <ul class="small text-muted mb-0">
{tips}                    </ul>
                </div>
            </div>
        </div>
"#,
        name = encode_text(&plan.name),
        description = encode_text(&plan.description),
        duration = encode_text(&plan.duration),
    )
}

fn macro_column(nutrient: Macronutrient, share: &MacroShare) -> String {
    let (color, icon) = macro_presentation(nutrient);
    format!(
        r#"                <div class="col-md-4">
                    <div class="macro-card p-4">
                        <div class="macro-icon bg-{color} text-white rounded-circle mx-auto mb-3"><i class="fas fa-{icon}"></i></div>
                        <h5 class="text-{color}">{label}</h5>
                        <div class="macro-amount fs-3 fw-bold">{grams}g</div>
                        <small class="text-muted">{calories} kcal, {percentage}% of total calories</small>
                        <div class="progress mt-2"><div class="progress-bar bg-{color}" style="width: {percentage}%"></div></div>
                    </div>
                </div>
"#,
        label = nutrient.label(),
        grams = share.grams,
        calories = share.calories,
        percentage = share.percentage,
    )
}

fn macro_card(results: &MetricsResults) -> String {
    let columns: String = Macronutrient::ALL
        .iter()
        .map(|n| macro_column(*n, results.macros.get(*n)))
        .collect();
    format!(
        r#"        <div class="col-12">
            <div class="result-card shadow-sm">
                <div class="card-header bg-info text-white"><h5 class="mb-0"><i class="fas fa-utensils me-2"></i>Daily Macronutrient Targets</h5></div>
                <div class="card-body"><div class="row text-center">
{columns}                </div></div>
            </div>
        </div>
"#
    )
}

fn input_summary(input: &MetricsInput) -> String {
    let gender = match input.gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    };
    format!(
        "{} cm, {} kg, {} years, {}, activity x{}",
        input.height_cm, input.weight_kg, input.age_years, gender, input.activity_level
    )
}

/// Render the full results document
pub fn results_page(input: &MetricsInput, results: &MetricsResults) -> String {
    let body = format!(
        r#"<nav class="navbar navbar-dark bg-gradient-primary shadow-lg">
    <div class="container">
        <a class="navbar-brand fw-bold" href="/"><i class="fas fa-calculator me-2"></i>{PAGE_TITLE}</a>
        <a href="/" class="btn btn-outline-light btn-sm rounded-pill"><i class="fas fa-arrow-left me-1"></i>Calculate Again</a>
    </div>
</nav>
<section class="py-5 bg-light">
    <div class="container">
        <h1 class="display-5 fw-bold text-center mb-2">Your Personalized Results</h1>
        <p class="text-center text-muted mb-4" data-inputs="{inputs_attr}">Based on {inputs}</p>
        <div class="row g-4">
{calories}{workout}{macros}        </div>
        <div class="text-center mt-5">
            <a href="/" class="btn btn-accent btn-lg rounded-pill px-5"><i class="fas fa-calculator me-2"></i>Calculate Again</a>
        </div>
    </div>
</section>"#,
        inputs_attr = encode_double_quoted_attribute(&input_summary(input)),
        inputs = encode_text(&input_summary(input)),
        calories = calorie_card(results),
        workout = workout_card(results),
        macros = macro_card(results),
    );
    document("Results", &body)
}

/// Render the error document shown when a submission is rejected
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<div class="container mt-5">
    <div class="row justify-content-center">
        <div class="col-md-6">
            <div class="alert alert-danger text-center">
                <h3><i class="fas fa-exclamation-triangle me-2"></i>Error</h3>
                <p class="mb-3">{message}</p>
                <a href="/" class="btn btn-primary"><i class="fas fa-arrow-left me-2"></i>Go Back</a>
            </div>
        </div>
    </div>
</div>"#,
        message = encode_text(message),
    );
    document("Error", &body)
}
