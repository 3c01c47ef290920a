//! Calorie and body metrics engine
//!
//! Turns a validated set of biometrics into BMR, maintenance and target
//! calories, BMI and a macronutrient split, then attaches the workout plan
//! for the requested training schedule.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every call builds a fresh record, nothing is cached
//! 2. **Table Driven**: goals and macro shares are closed enums, not string checks
//! 3. **No Range Checks**: callers validate domains first (see `validation`)

use crate::errors::MetricsError;
use crate::workout::{select_workout_plan, WorkoutPlan};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Input Types
// ============================================================================

/// Gender as used by the Mifflin-St Jeor equation
///
/// Only `male` selects the +5 offset; every other submitted value uses the
/// -161 branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Map a submitted form value onto the equation branch
    ///
    /// Only the exact value `male` selects the +5 branch.
    pub fn from_form_value(value: &str) -> Self {
        if value == "male" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Constant added to the shared BMR base
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

/// Weight goal selecting the calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Resolve a submitted goal; absent or unknown values mean maintain
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("lose") => Goal::Lose,
            Some("gain") => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    /// Daily calorie delta applied on top of maintenance
    pub fn calorie_adjustment(&self) -> i64 {
        match self {
            Goal::Lose => -500,
            Goal::Maintain => 0,
            Goal::Gain => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated engine input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsInput {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age in whole years
    pub age_years: u32,
    pub gender: Gender,
    /// Activity multiplier applied to BMR
    pub activity_level: f64,
    pub goal: Goal,
    /// Training days per week
    pub days_per_week: u32,
    /// Hours per training session, display only
    pub hours_per_session: f64,
}

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category (lower bound inclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::NormalWeight => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Round half away from zero to one decimal place
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate BMI from height and weight, rounded to one decimal
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, MetricsError> {
    let height_cm = MetricsError::require_positive("height", height_cm)?;
    let weight_kg = MetricsError::require_finite("weight", weight_kg)?;

    let height_m = height_cm / 100.0;
    Ok(round_to_one_decimal(weight_kg / (height_m * height_m)))
}

/// Classify BMI into category; boundaries belong to the higher category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR and Calorie Targets
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Others: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// The result is not rounded.
pub fn calculate_bmr(
    height_cm: f64,
    weight_kg: f64,
    age_years: u32,
    gender: Gender,
) -> Result<f64, MetricsError> {
    let height_cm = MetricsError::require_finite("height", height_cm)?;
    let weight_kg = MetricsError::require_finite("weight", weight_kg)?;

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    Ok(base + gender.bmr_offset())
}

/// Maintenance calories: BMR scaled by the activity multiplier, rounded
pub fn maintenance_calories(bmr: f64, activity_level: f64) -> i64 {
    (bmr * activity_level).round() as i64
}

/// Apply the goal's fixed adjustment to maintenance calories
pub fn derive_target_calories(maintenance_calories: i64, goal: Goal) -> i64 {
    maintenance_calories + goal.calorie_adjustment()
}

// ============================================================================
// Macronutrients
// ============================================================================

/// Macronutrients in the fixed 30/35/35 split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    Protein,
    Carbs,
    Fat,
}

impl Macronutrient {
    pub const ALL: [Macronutrient; 3] = [
        Macronutrient::Protein,
        Macronutrient::Carbs,
        Macronutrient::Fat,
    ];

    /// Share of total calories, in percent
    pub fn percentage(&self) -> u32 {
        match self {
            Macronutrient::Protein => 30,
            Macronutrient::Carbs => 35,
            Macronutrient::Fat => 35,
        }
    }

    /// Share of total calories as a multiplier
    pub fn fraction(&self) -> f64 {
        match self {
            Macronutrient::Protein => 0.30,
            Macronutrient::Carbs | Macronutrient::Fat => 0.35,
        }
    }

    /// Energy density in kcal per gram
    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Macronutrient::Protein | Macronutrient::Carbs => 4.0,
            Macronutrient::Fat => 9.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Macronutrient::Protein => "Protein",
            Macronutrient::Carbs => "Carbohydrates",
            Macronutrient::Fat => "Fats",
        }
    }

    /// Compute this macro's share of `target_calories`
    pub fn share_of(&self, target_calories: i64) -> MacroShare {
        let calories = target_calories as f64 * self.fraction();
        MacroShare {
            grams: (calories / self.kcal_per_gram()).round() as i64,
            calories: calories.round() as i64,
            percentage: self.percentage(),
        }
    }
}

/// One macronutrient's allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroShare {
    pub grams: i64,
    pub calories: i64,
    pub percentage: u32,
}

/// Daily macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: MacroShare,
    pub carbs: MacroShare,
    pub fat: MacroShare,
}

impl MacroBreakdown {
    pub fn get(&self, nutrient: Macronutrient) -> &MacroShare {
        match nutrient {
            Macronutrient::Protein => &self.protein,
            Macronutrient::Carbs => &self.carbs,
            Macronutrient::Fat => &self.fat,
        }
    }

    /// Sum of the rounded calorie shares
    pub fn total_calories(&self) -> i64 {
        self.protein.calories + self.carbs.calories + self.fat.calories
    }
}

/// Split target calories into protein, carbs and fat
///
/// Each value is rounded on its own; the parts are not re-normalised.
pub fn calculate_macros(target_calories: i64) -> MacroBreakdown {
    MacroBreakdown {
        protein: Macronutrient::Protein.share_of(target_calories),
        carbs: Macronutrient::Carbs.share_of(target_calories),
        fat: Macronutrient::Fat.share_of(target_calories),
    }
}

// ============================================================================
// Full Pipeline
// ============================================================================

/// Complete calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResults {
    pub bmr: i64,
    pub maintenance_calories: i64,
    pub target_calories: i64,
    pub calorie_adjustment: i64,
    pub goal: Goal,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub macros: MacroBreakdown,
    pub workout_plan: WorkoutPlan,
}

/// Run the whole engine for one validated input
///
/// Either every value is produced or a single error is returned.
pub fn calculate_results(input: &MetricsInput) -> Result<MetricsResults, MetricsError> {
    let bmr = calculate_bmr(input.height_cm, input.weight_kg, input.age_years, input.gender)?;
    let activity_level = MetricsError::require_positive("activity_level", input.activity_level)?;
    let hours = MetricsError::require_positive("hours", input.hours_per_session)?;

    let maintenance = maintenance_calories(bmr, activity_level);
    let target = derive_target_calories(maintenance, input.goal);
    let bmi = calculate_bmi(input.height_cm, input.weight_kg)?;

    Ok(MetricsResults {
        bmr: bmr.round() as i64,
        maintenance_calories: maintenance,
        target_calories: target,
        calorie_adjustment: input.goal.calorie_adjustment(),
        goal: input.goal,
        bmi,
        bmi_category: classify_bmi(bmi),
        macros: calculate_macros(target),
        workout_plan: select_workout_plan(input.days_per_week, hours),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn sample_input(goal: Goal) -> MetricsInput {
        MetricsInput {
            height_cm: 180.0,
            weight_kg: 80.0,
            age_years: 30,
            gender: Gender::Male,
            activity_level: 1.55,
            goal,
            days_per_week: 3,
            hours_per_session: 1.0,
        }
    }

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        assert_eq!(calculate_bmi(180.0, 80.0).unwrap(), 24.7);
        assert_eq!(calculate_bmi(160.0, 45.0).unwrap(), 17.6);
    }

    #[test]
    fn test_bmi_rejects_unusable_height() {
        assert!(calculate_bmi(0.0, 80.0).is_err());
        assert!(calculate_bmi(f64::NAN, 80.0).is_err());
        assert!(calculate_bmi(180.0, f64::INFINITY).is_err());
    }

    #[rstest]
    #[case(17.6, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::NormalWeight)]
    #[case(24.7, BmiCategory::NormalWeight)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.9, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    fn test_bmi_categories(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_bmi_category_labels() {
        assert_eq!(classify_bmi(24.7).label(), "Normal weight");
        assert_eq!(classify_bmi(17.6).to_string(), "Underweight");
    }

    #[test]
    fn test_round_to_one_decimal_half_away_from_zero() {
        assert_eq!(round_to_one_decimal(22.25), 22.3);
        assert_eq!(round_to_one_decimal(-0.25), -0.3);
        assert_eq!(round_to_one_decimal(24.691), 24.7);
    }

    // =========================================================================
    // BMR / Calorie Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin() {
        assert_eq!(calculate_bmr(180.0, 80.0, 30, Gender::Male).unwrap(), 1780.0);
        assert_eq!(calculate_bmr(180.0, 80.0, 30, Gender::Female).unwrap(), 1614.0);
    }

    #[test]
    fn test_bmr_rejects_non_finite() {
        assert!(calculate_bmr(f64::NAN, 80.0, 30, Gender::Male).is_err());
        assert!(calculate_bmr(180.0, f64::INFINITY, 30, Gender::Male).is_err());
    }

    #[rstest]
    #[case("male", Gender::Male)]
    #[case("Male", Gender::Female)]
    #[case("MALE", Gender::Female)]
    #[case(" male ", Gender::Female)]
    #[case("female", Gender::Female)]
    #[case("other", Gender::Female)]
    #[case("", Gender::Female)]
    fn test_gender_from_form_value(#[case] raw: &str, #[case] expected: Gender) {
        assert_eq!(Gender::from_form_value(raw), expected);
    }

    #[test]
    fn test_only_exact_male_uses_male_bmr() {
        let bmr = |raw: &str| calculate_bmr(180.0, 80.0, 30, Gender::from_form_value(raw)).unwrap();
        assert_eq!(bmr("male"), 1780.0);
        assert_eq!(bmr("MALE"), 1614.0);
    }

    #[rstest]
    #[case(Some("lose"), Goal::Lose)]
    #[case(Some("gain"), Goal::Gain)]
    #[case(Some("maintain"), Goal::Maintain)]
    #[case(Some("bulk"), Goal::Maintain)]
    #[case(None, Goal::Maintain)]
    fn test_goal_from_form_value(#[case] raw: Option<&str>, #[case] expected: Goal) {
        assert_eq!(Goal::from_form_value(raw), expected);
    }

    #[test]
    fn test_target_calories_per_goal() {
        assert_eq!(derive_target_calories(2759, Goal::Lose), 2259);
        assert_eq!(derive_target_calories(2759, Goal::Maintain), 2759);
        assert_eq!(derive_target_calories(2759, Goal::Gain), 3259);
    }

    #[test]
    fn test_maintenance_calories_rounds() {
        // 1780 * 1.55 = 2759.0
        assert_eq!(maintenance_calories(1780.0, 1.55), 2759);
        assert_eq!(maintenance_calories(1614.0, 1.375), 2219);
    }

    // =========================================================================
    // Macro Tests
    // =========================================================================

    #[test]
    fn test_macro_split() {
        let macros = calculate_macros(2000);
        assert_eq!(macros.protein, MacroShare { grams: 150, calories: 600, percentage: 30 });
        assert_eq!(macros.carbs, MacroShare { grams: 175, calories: 700, percentage: 35 });
        assert_eq!(macros.fat, MacroShare { grams: 78, calories: 700, percentage: 35 });
    }

    /// Shares are taken with the 0.30 / 0.35 multipliers, so float results
    /// just under a half round down
    #[rstest]
    #[case(1350, Macronutrient::Carbs, 118, 472)]
    #[case(1350, Macronutrient::Protein, 101, 405)]
    #[case(2610, Macronutrient::Fat, 101, 913)]
    #[case(2610, Macronutrient::Carbs, 228, 913)]
    fn test_macro_rounding_on_half_way_targets(
        #[case] target: i64,
        #[case] nutrient: Macronutrient,
        #[case] grams: i64,
        #[case] calories: i64,
    ) {
        let share = *calculate_macros(target).get(nutrient);
        assert_eq!((share.grams, share.calories), (grams, calories));
    }

    #[test]
    fn test_macro_percentages_are_fixed() {
        for target in [0, 1200, 2759, 4100] {
            let macros = calculate_macros(target);
            let total: u32 = Macronutrient::ALL
                .iter()
                .map(|m| macros.get(*m).percentage)
                .sum();
            assert_eq!(total, 100);
        }
    }

    // =========================================================================
    // Pipeline Tests
    // =========================================================================

    #[test]
    fn test_full_results() {
        let results = calculate_results(&sample_input(Goal::Lose)).unwrap();
        assert_eq!(results.bmr, 1780);
        assert_eq!(results.maintenance_calories, 2759);
        assert_eq!(results.target_calories, 2259);
        assert_eq!(results.calorie_adjustment, -500);
        assert_eq!(results.bmi, 24.7);
        assert_eq!(results.bmi_category, BmiCategory::NormalWeight);
        assert_eq!(results.workout_plan.name, "Push-Pull-Legs");
        assert_eq!(results.workout_plan.duration, "1 hour per session");
    }

    #[test]
    fn test_results_are_idempotent() {
        let input = sample_input(Goal::Gain);
        assert_eq!(calculate_results(&input).unwrap(), calculate_results(&input).unwrap());
    }

    #[test]
    fn test_results_reject_bad_activity_level() {
        let mut input = sample_input(Goal::Maintain);
        input.activity_level = 0.0;
        assert!(matches!(
            calculate_results(&input),
            Err(MetricsError::InvalidInput { field: "activity_level", .. })
        ));
    }

    #[test]
    fn test_results_serialize_snake_case() {
        let results = calculate_results(&sample_input(Goal::Maintain)).unwrap();
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["maintenance_calories"], 2759);
        assert_eq!(json["goal"], "maintain");
        assert_eq!(json["bmi_category"], "normal_weight");
        assert_eq!(json["macros"]["fat"]["percentage"], 35);
    }

    fn goal_strategy() -> impl Strategy<Value = Goal> {
        prop_oneof![Just(Goal::Lose), Just(Goal::Maintain), Just(Goal::Gain)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: target differs from maintenance by exactly the goal's delta
        #[test]
        fn prop_target_offset_is_exact(
            height in 100.0f64..=250.0,
            weight in 30.0f64..=300.0,
            age in 15u32..=100,
            activity in 1.2f64..2.4,
            goal in goal_strategy()
        ) {
            let input = MetricsInput {
                height_cm: height,
                weight_kg: weight,
                age_years: age,
                gender: Gender::Female,
                activity_level: activity,
                goal,
                days_per_week: 4,
                hours_per_session: 1.5,
            };
            let results = calculate_results(&input).unwrap();
            let delta = results.target_calories - results.maintenance_calories;
            prop_assert!([-500, 0, 500].contains(&delta));
            prop_assert_eq!(delta, goal.calorie_adjustment());
        }

        /// Property: macro calorie shares add back up to the target
        #[test]
        fn prop_macros_reconstruct_target(target in 0i64..6000) {
            let macros = calculate_macros(target);
            prop_assert!((macros.total_calories() - target).abs() <= 3,
                "shares {} vs target {}", macros.total_calories(), target);
        }

        /// Property: BMI ignores goal and activity
        #[test]
        fn prop_bmi_depends_only_on_body(
            activity in 1.2f64..2.4,
            goal in goal_strategy()
        ) {
            let mut input = sample_input(goal);
            input.activity_level = activity;
            let results = calculate_results(&input).unwrap();
            prop_assert_eq!(results.bmi, calculate_bmi(180.0, 80.0).unwrap());
        }

        /// Property: Male BMR exceeds the other branch by exactly 166
        #[test]
        fn prop_male_offset(
            weight in 30.0f64..300.0,
            height in 100.0f64..250.0,
            age in 15u32..100
        ) {
            let male = calculate_bmr(height, weight, age, Gender::Male).unwrap();
            let female = calculate_bmr(height, weight, age, Gender::Female).unwrap();
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }
    }
}
