//! Workout plan recommendations
//!
//! A fixed table of training splits keyed by training days per week. Any
//! day count without its own entry gets the high-frequency fallback split.

use serde::{Deserialize, Serialize};

/// Static description of a training split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub exercises: &'static [&'static str],
}

static PLAN_TABLE: [(u32, PlanTemplate); 5] = [
    (
        1,
        PlanTemplate {
            name: "Full Body Blast",
            description: "Complete full-body workout hitting all major muscle groups",
            exercises: &["Squats", "Deadlifts", "Push-ups", "Pull-ups", "Planks"],
        },
    ),
    (
        2,
        PlanTemplate {
            name: "Push-Pull Split",
            description: "Efficient 2-day split focusing on pushing and pulling movements",
            exercises: &[
                "Day 1: Push (Chest, Shoulders, Triceps)",
                "Day 2: Pull (Back, Biceps) + Legs",
            ],
        },
    ),
    (
        3,
        PlanTemplate {
            name: "Push-Pull-Legs",
            description: "Classic 3-day split for balanced muscle development",
            exercises: &[
                "Day 1: Push (Chest, Shoulders, Triceps)",
                "Day 2: Pull (Back, Biceps)",
                "Day 3: Legs & Core",
            ],
        },
    ),
    (
        4,
        PlanTemplate {
            name: "Upper/Lower Split",
            description: "4-day program alternating between upper and lower body",
            exercises: &["Day 1 & 3: Upper Body", "Day 2 & 4: Lower Body"],
        },
    ),
    (
        5,
        PlanTemplate {
            name: "Arnold Split",
            description: "Advanced 5-day split for serious muscle building",
            exercises: &[
                "Chest/Back",
                "Shoulders/Arms",
                "Legs",
                "Chest/Back",
                "Shoulders/Arms",
            ],
        },
    ),
];

/// Split used for 6+ days and any day count missing from the table
pub static FALLBACK_PLAN: PlanTemplate = PlanTemplate {
    name: "Bro Split",
    description: "Advanced 6+ day split with dedicated muscle group days",
    exercises: &["Chest", "Back", "Shoulders", "Arms", "Legs", "Core"],
};

/// Recommended workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub name: String,
    pub description: String,
    pub exercises: Vec<String>,
    /// Session length label, e.g. "1.5 hours per session"
    pub duration: String,
}

/// Look up the template for a training frequency
pub fn plan_template(days: u32) -> &'static PlanTemplate {
    PLAN_TABLE
        .iter()
        .find(|(key, _)| *key == days)
        .map(|(_, plan)| plan)
        .unwrap_or(&FALLBACK_PLAN)
}

/// Build the duration label
///
/// "hour" is singular only for exactly one hour; multi-day plans add
/// "per session".
pub fn duration_label(days: u32, hours: f64) -> String {
    let unit = if hours == 1.0 { "hour" } else { "hours" };
    if days > 1 {
        format!("{} {} per session", hours, unit)
    } else {
        format!("{} {}", hours, unit)
    }
}

/// Select the workout plan for the given schedule
pub fn select_workout_plan(days: u32, hours: f64) -> WorkoutPlan {
    let template = plan_template(days);
    WorkoutPlan {
        name: template.name.to_string(),
        description: template.description.to_string(),
        exercises: template.exercises.iter().map(|e| e.to_string()).collect(),
        duration: duration_label(days, hours),
    }
}
