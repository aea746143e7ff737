// ABOUTME: Typed plan document model forming the single deserialization boundary
// ABOUTME: Closed set of serde types for overview, weekly structure, daily templates, and rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Document
//!
//! The nested plan body stored in a health plan's `plan_data` column. Rather
//! than one dynamically-typed JSON blob, each section is a closed serde type,
//! so "did the model return well-formed JSON" is answered once, at
//! deserialization plus [`PlanDocument::validate`], instead of ad hoc field
//! access scattered through the generator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete nested plan body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Narrative overview of the plan
    pub overview: Overview,
    /// Per-week structure, keyed by stringified week number "1".."n"
    pub weekly_structure: BTreeMap<String, WeeklyStructureEntry>,
    /// Weekday and weekend day templates
    pub daily_templates: DailyTemplates,
    /// Compliance thresholds and adjustment triggers
    pub adaptation_rules: AdaptationRules,
    /// Weekly progression deltas and plateau handling
    pub progression_rules: ProgressionRules,
}

impl PlanDocument {
    /// Validate the structural contract for a plan of `duration_weeks` weeks.
    ///
    /// `weekly_structure` must contain exactly the keys `"1".."n"`, each with
    /// non-empty focus areas, activities, milestones, and goals.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated constraint.
    pub fn validate(&self, duration_weeks: u32) -> Result<(), String> {
        if duration_weeks < 1 {
            return Err("duration_weeks must be at least 1".into());
        }
        if self.weekly_structure.len() != duration_weeks as usize {
            return Err(format!(
                "weekly_structure has {} entries, expected {duration_weeks}",
                self.weekly_structure.len()
            ));
        }
        for week in 1..=duration_weeks {
            let key = week.to_string();
            let Some(entry) = self.weekly_structure.get(&key) else {
                return Err(format!("weekly_structure missing week {key}"));
            };
            if entry.focus_areas.is_empty()
                || entry.key_activities.is_empty()
                || entry.milestones.is_empty()
                || entry.weekly_goals.is_empty()
            {
                return Err(format!("week {key} has an empty structure list"));
            }
        }
        Ok(())
    }
}

/// Narrative plan overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// One-line plan description
    pub description: String,
    /// Expected outcomes, copied from the goal classification
    pub expected_outcomes: Vec<String>,
    /// Guiding principles
    pub key_principles: Vec<String>,
    /// How success is measured
    pub success_metrics: Vec<String>,
    /// Safety guidance
    pub safety_considerations: Vec<String>,
}

/// Relative intensity of a plan week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Ramp-up weeks
    Low,
    /// Standard working intensity
    Moderate,
    /// Peak intensity
    High,
}

/// One week's structure within the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStructureEntry {
    /// Focus areas for the week
    pub focus_areas: Vec<String>,
    /// Intensity for the week
    pub intensity_level: IntensityLevel,
    /// Activities to emphasize
    pub key_activities: Vec<String>,
    /// Week milestones
    pub milestones: Vec<String>,
    /// Goals to hold for the week
    pub weekly_goals: Vec<String>,
}

/// Weekday and weekend templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTemplates {
    /// Monday-Friday template
    pub weekday: DayTemplate,
    /// Saturday-Sunday template
    pub weekend: DayTemplate,
}

impl DailyTemplates {
    /// Select the template for an ISO day of week (1=Monday .. 7=Sunday)
    #[must_use]
    pub fn for_day_of_week(&self, day_of_week: u32) -> &DayTemplate {
        if day_of_week >= 6 {
            &self.weekend
        } else {
            &self.weekday
        }
    }
}

/// Template for a single day type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTemplate {
    /// Activities performed after waking
    pub morning_routine: Vec<Activity>,
    /// Planned meals
    pub meals: Vec<MealPlan>,
    /// Planned workouts
    pub workouts: Vec<WorkoutPlan>,
    /// Activities performed before bed
    pub evening_routine: Vec<Activity>,
    /// Wellness activities at any time of day
    pub wellness_activities: Vec<Activity>,
    /// Hydration targets
    pub hydration_goals: Vec<HydrationGoal>,
    /// Sleep window and hygiene targets
    pub sleep_targets: SleepTarget,
}

impl DayTemplate {
    /// Total number of scheduled activities across the four tracked
    /// categories (routines combined, meals, workouts, wellness)
    #[must_use]
    pub fn total_activities(&self) -> u32 {
        (self.morning_routine.len()
            + self.evening_routine.len()
            + self.meals.len()
            + self.workouts.len()
            + self.wellness_activities.len()) as u32
    }
}

/// A scheduled non-meal, non-workout activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Stable identifier within the template
    pub id: String,
    /// Short title
    pub title: String,
    /// What to do
    pub description: String,
    /// Duration in minutes
    pub duration: u32,
    /// Activity kind (hydration, wellness, ...)
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Grouping category
    pub category: String,
    /// Step-by-step instructions
    pub instructions: Vec<String>,
    /// Helpful tips
    pub tips: Vec<String>,
    /// easy, moderate, or hard
    pub difficulty_level: String,
    /// Impact scores per goal dimension, -1.0 to 1.0
    pub impact_on_goals: BTreeMap<String, f64>,
    /// morning, evening, or anytime
    pub time_of_day: String,
    /// daily, weekly, ...
    pub frequency: String,
    /// Whether skipping counts against compliance
    pub is_required: bool,
    /// What counts as done
    pub completion_criteria: Vec<String>,
}

/// A planned meal with nutrition breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Stable identifier within the template
    pub id: String,
    /// breakfast, lunch, dinner, or snack
    pub meal_type: String,
    /// Meal name
    pub name: String,
    /// Meal description
    pub description: String,
    /// Ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Number of servings
    pub servings: u32,
    /// Macro breakdown
    pub nutrition: NutritionInfo,
    /// Dietary tags (vegetarian, gluten-free, ...)
    pub dietary_tags: Vec<String>,
    /// easy, moderate, or hard
    pub difficulty: String,
}

/// A single meal ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Measurement unit
    pub unit: String,
}

/// Per-meal macro breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    /// Kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
    /// Sugar in grams
    pub sugar: f64,
    /// Sodium in milligrams
    pub sodium: f64,
}

/// A planned workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Stable identifier within the template
    pub id: String,
    /// Workout name
    pub name: String,
    /// strength, cardio, flexibility, ...
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes
    pub duration: u32,
    /// Main exercises (may be empty in template form)
    pub exercises: Vec<Exercise>,
    /// Warm-up exercises
    pub warm_up: Vec<Exercise>,
    /// Cool-down exercises
    pub cool_down: Vec<Exercise>,
    /// Required equipment
    pub equipment_needed: Vec<String>,
    /// minimal, moderate, or large
    pub space_required: String,
    /// low, moderate, or high
    pub intensity: String,
    /// beginner, intermediate, or advanced
    pub difficulty: String,
    /// Estimated calories burned
    pub calories_burned_estimate: u32,
    /// Muscle groups targeted
    pub muscle_groups_targeted: Vec<String>,
}

/// A single exercise within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets, when set-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Repetitions per set, when set-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Duration in seconds, when time-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Form instructions
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Daily hydration target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationGoal {
    /// Daily intake target in milliliters
    pub daily_target: u32,
    /// When to drink
    pub timing_recommendations: Vec<String>,
    /// Water quality guidance
    pub quality_guidelines: Vec<String>,
    /// How intake is tracked
    pub tracking_method: String,
}

/// Sleep window and hygiene targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepTarget {
    /// Target sleep duration in hours
    pub target_duration: u32,
    /// Bedtime window, e.g. "10:00 PM - 11:00 PM"
    pub bedtime_range: String,
    /// Wake window, e.g. "6:00 AM - 7:00 AM"
    pub wake_time_range: String,
    /// Sleep hygiene practices
    pub sleep_hygiene_practices: Vec<String>,
    /// Bedroom environment guidance
    pub environment_recommendations: Vec<String>,
}

/// Compliance thresholds and the triggers that adjust a running plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationRules {
    /// Compliance bands in percent
    pub compliance_thresholds: ComplianceThresholds,
    /// Text conditions mapped to adjustment actions
    pub adjustment_triggers: AdjustmentTriggers,
}

/// Compliance rate bands in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceThresholds {
    /// 90%+
    pub excellent: u32,
    /// 70-89%
    pub good: u32,
    /// 50-69%
    pub needs_improvement: u32,
    /// Below 50%
    pub poor: u32,
}

/// Conditions that trigger each plan adjustment action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentTriggers {
    /// Conditions that extend the timeline
    pub timeline_extension: Vec<String>,
    /// Conditions that raise intensity
    pub intensity_increase: Vec<String>,
    /// Conditions that lower intensity
    pub intensity_decrease: Vec<String>,
    /// Conditions that modify the plan wholesale
    pub plan_modification: Vec<String>,
}

/// Weekly progression deltas and plateau handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRules {
    /// Week-over-week progression deltas
    pub weekly_progression: WeeklyProgression,
    /// Plateau detection and response
    pub plateau_handling: PlateauHandling,
}

/// Week-over-week progression deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyProgression {
    /// Intensity increase per week, percent
    pub intensity_increase_percentage: u32,
    /// Volume increase per week, percent
    pub volume_increase_percentage: u32,
    /// Whether exercise complexity also increases
    pub complexity_increase: bool,
}

/// Plateau detection criteria and adjustment strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateauHandling {
    /// How a plateau is detected
    pub detection_criteria: Vec<String>,
    /// How a plateau is broken
    pub adjustment_strategies: Vec<String>,
}

/// How important a weekly milestone is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneImportance {
    /// Nice to hit
    Low,
    /// Standard weekly milestone
    Medium,
    /// Checkpoint week (every 4th)
    High,
}

/// One milestone per plan week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMilestone {
    /// Week this milestone belongs to, 1-based
    pub week_number: u32,
    /// Milestone title
    pub title: String,
    /// What the milestone represents
    pub description: String,
    /// What counts as achieving it
    pub success_criteria: Vec<String>,
    /// How achievement is measured
    pub measurement_method: String,
    /// Importance band
    pub importance: MilestoneImportance,
    /// Milestone category
    pub category: String,
}

/// Weighted area within a monthly assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentArea {
    /// Area name
    pub name: String,
    /// What the area covers
    pub description: String,
    /// Metrics evaluated in this area
    pub metrics: Vec<String>,
    /// Importance weight; weights sum to 1.0 across areas
    pub weight: f64,
}

/// Scale bounds for a questionnaire item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRange {
    /// Minimum value
    pub min: u32,
    /// Maximum value
    pub max: u32,
    /// Endpoint labels
    pub labels: Vec<String>,
}

/// One questionnaire item in a monthly assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    /// Stable item identifier
    pub id: String,
    /// The question text
    pub question: String,
    /// scale, boolean, multiple_choice, or text
    #[serde(rename = "type")]
    pub question_type: String,
    /// Present for scale questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_range: Option<ScaleRange>,
    /// Whether an answer is mandatory
    pub required: bool,
}

/// Monthly progress assessment template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAssessment {
    /// Month this assessment belongs to, 1-based
    pub month_number: u32,
    /// Assessment title
    pub title: String,
    /// What the assessment reviews
    pub description: String,
    /// Weighted assessment areas
    pub assessment_areas: Vec<AssessmentArea>,
    /// Measurements the user must record
    pub required_measurements: Vec<String>,
    /// Measurements the user may record
    pub optional_measurements: Vec<String>,
    /// Questionnaire items
    pub questionnaire: Vec<AssessmentQuestion>,
    /// Conditions that trigger a plan adjustment
    pub adjustment_triggers: Vec<String>,
}
