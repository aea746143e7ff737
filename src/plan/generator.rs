// ABOUTME: Deterministic plan document generator used when the LLM path is unavailable
// ABOUTME: Builds overview, per-week structure, day templates, and rule tables from constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Deterministic Plan Generator
//!
//! Produces a complete [`PlanDocument`] from a goal classification alone,
//! with no external calls. The output is fully reproducible: the same
//! classification always yields the same document.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::PlanCalculation;

use super::constants::{adaptation, overview, phases, progression, weekday, weekend};
use super::document::{
    Activity, AdaptationRules, AdjustmentTriggers, ComplianceThresholds, DailyTemplates,
    DayTemplate, HydrationGoal, Ingredient, IntensityLevel, MealPlan, NutritionInfo, Overview,
    PlanDocument, PlateauHandling, ProgressionRules, SleepTarget, WeeklyProgression,
    WeeklyStructureEntry, WorkoutPlan,
};

/// Plan phase computed from elapsed fraction of the plan duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// First quarter of the plan
    Introduction,
    /// Up to three quarters
    Building,
    /// Up to 90%
    Optimization,
    /// Final stretch
    Maintenance,
}

impl Phase {
    /// Phase for 1-based `week` of a `duration_weeks`-week plan
    #[must_use]
    pub fn for_week(week: u32, duration_weeks: u32) -> Self {
        let fraction = f64::from(week) / f64::from(duration_weeks.max(1));
        if fraction <= phases::INTRODUCTION_END {
            Self::Introduction
        } else if fraction <= phases::BUILDING_END {
            Self::Building
        } else if fraction <= phases::OPTIMIZATION_END {
            Self::Optimization
        } else {
            Self::Maintenance
        }
    }

    fn focus_areas(self) -> [&'static str; 3] {
        match self {
            Self::Introduction => ["Habit establishment", "Baseline assessment", "Education"],
            Self::Building => ["Progressive improvement", "Skill development", "Consistency"],
            Self::Optimization => ["Performance enhancement", "Fine-tuning", "Advanced techniques"],
            Self::Maintenance => ["Sustainability", "Long-term planning", "Lifestyle integration"],
        }
    }

    fn key_activities(self) -> [&'static str; 3] {
        match self {
            Self::Introduction => ["Assessment", "Goal setting", "Basic routines"],
            Self::Building => ["Progressive exercises", "Skill practice", "Habit reinforcement"],
            Self::Optimization => ["Advanced techniques", "Performance testing", "Refinement"],
            Self::Maintenance => ["Routine maintenance", "Long-term planning", "Adaptation"],
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Introduction => "introduction",
            Self::Building => "building",
            Self::Optimization => "optimization",
            Self::Maintenance => "maintenance",
        };
        f.write_str(name)
    }
}

/// Generate the full deterministic plan document for a classification
#[must_use]
pub fn generate(calculation: &PlanCalculation) -> PlanDocument {
    PlanDocument {
        overview: build_overview(calculation),
        weekly_structure: build_weekly_structure(calculation.duration_weeks),
        daily_templates: build_daily_templates(),
        adaptation_rules: build_adaptation_rules(),
        progression_rules: build_progression_rules(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn build_overview(calculation: &PlanCalculation) -> Overview {
    Overview {
        description: format!(
            "A comprehensive {}-week plan focused on your health goals",
            calculation.duration_weeks
        ),
        expected_outcomes: calculation.expected_outcomes.clone(),
        key_principles: owned(&overview::KEY_PRINCIPLES),
        success_metrics: owned(&overview::SUCCESS_METRICS),
        safety_considerations: owned(&overview::SAFETY_CONSIDERATIONS),
    }
}

fn build_weekly_structure(duration_weeks: u32) -> BTreeMap<String, WeeklyStructureEntry> {
    let mut structure = BTreeMap::new();
    for week in 1..=duration_weeks {
        let phase = Phase::for_week(week, duration_weeks);
        // Intensity ramps off the phase label: only the first two weeks run
        // low, every later week stays moderate including maintenance weeks.
        let intensity_level = if week <= phases::LOW_INTENSITY_WEEKS {
            IntensityLevel::Low
        } else {
            IntensityLevel::Moderate
        };
        structure.insert(
            week.to_string(),
            WeeklyStructureEntry {
                focus_areas: owned(&phase.focus_areas()),
                intensity_level,
                key_activities: owned(&phase.key_activities()),
                milestones: vec![
                    format!("Week {week} milestone"),
                    format!("{phase} phase progress"),
                ],
                weekly_goals: vec![
                    "Complete all daily activities".to_string(),
                    format!("Maintain {phase} phase standards"),
                    "Progress toward overall goal".to_string(),
                ],
            },
        );
    }
    structure
}

fn build_daily_templates() -> DailyTemplates {
    DailyTemplates {
        weekday: build_weekday_template(),
        weekend: build_weekend_template(),
    }
}

fn build_weekday_template() -> DayTemplate {
    DayTemplate {
        morning_routine: vec![Activity {
            id: "morning-hydration".to_string(),
            title: "Morning Hydration".to_string(),
            description: format!(
                "Drink {}ml of water upon waking",
                weekday::HYDRATION_AMOUNT_ML
            ),
            duration: weekday::HYDRATION_DURATION_MIN,
            activity_type: "hydration".to_string(),
            category: "wellness".to_string(),
            instructions: vec![
                "Keep water by bedside".to_string(),
                "Drink immediately upon waking".to_string(),
            ],
            tips: vec![
                "Helps kickstart metabolism".to_string(),
                "Rehydrates after sleep".to_string(),
            ],
            difficulty_level: "easy".to_string(),
            impact_on_goals: BTreeMap::from([
                ("hydration".to_string(), 1.0),
                ("energy".to_string(), 0.5),
            ]),
            time_of_day: "morning".to_string(),
            frequency: "daily".to_string(),
            is_required: true,
            completion_criteria: vec!["500ml water consumed".to_string()],
        }],
        meals: vec![MealPlan {
            id: "weekday-breakfast".to_string(),
            meal_type: "breakfast".to_string(),
            name: "Healthy Breakfast".to_string(),
            description: "Balanced morning meal".to_string(),
            ingredients: vec![
                Ingredient {
                    name: "Oats".to_string(),
                    quantity: weekday::OATS_QUANTITY_G,
                    unit: "g".to_string(),
                },
                Ingredient {
                    name: "Banana".to_string(),
                    quantity: 1.0,
                    unit: "medium".to_string(),
                },
            ],
            instructions: vec!["Prepare oats".to_string(), "Add banana".to_string()],
            prep_time: 10,
            cook_time: 5,
            servings: 1,
            nutrition: NutritionInfo {
                calories: weekday::BREAKFAST_CALORIES,
                protein: weekday::BREAKFAST_PROTEIN_G,
                carbohydrates: weekday::BREAKFAST_CARBS_G,
                fat: weekday::BREAKFAST_FAT_G,
                fiber: weekday::BREAKFAST_FIBER_G,
                sugar: weekday::BREAKFAST_SUGAR_G,
                sodium: weekday::BREAKFAST_SODIUM_MG,
            },
            dietary_tags: vec!["vegetarian".to_string()],
            difficulty: "easy".to_string(),
        }],
        workouts: vec![WorkoutPlan {
            id: "weekday-workout".to_string(),
            name: "Morning Workout".to_string(),
            workout_type: "strength".to_string(),
            duration: weekday::WORKOUT_DURATION_MIN,
            exercises: vec![],
            warm_up: vec![],
            cool_down: vec![],
            equipment_needed: vec!["bodyweight".to_string()],
            space_required: "minimal".to_string(),
            intensity: "moderate".to_string(),
            difficulty: "beginner".to_string(),
            calories_burned_estimate: weekday::WORKOUT_CALORIES,
            muscle_groups_targeted: vec!["full_body".to_string()],
        }],
        evening_routine: vec![Activity {
            id: "evening-reflection".to_string(),
            title: "Daily Reflection".to_string(),
            description: "5-minute reflection on the day".to_string(),
            duration: weekday::REFLECTION_DURATION_MIN,
            activity_type: "wellness".to_string(),
            category: "mental_health".to_string(),
            instructions: vec![
                "Review daily achievements".to_string(),
                "Note challenges".to_string(),
            ],
            tips: vec![
                "Improves self-awareness".to_string(),
                "Tracks progress".to_string(),
            ],
            difficulty_level: "easy".to_string(),
            impact_on_goals: BTreeMap::from([
                ("wellness".to_string(), 0.5),
                ("mental_health".to_string(), 0.7),
            ]),
            time_of_day: "evening".to_string(),
            frequency: "daily".to_string(),
            is_required: false,
            completion_criteria: vec!["5 minutes of reflection completed".to_string()],
        }],
        wellness_activities: vec![Activity {
            id: "mindfulness".to_string(),
            title: "Mindfulness Practice".to_string(),
            description: "10-minute mindfulness or meditation".to_string(),
            duration: weekday::MINDFULNESS_DURATION_MIN,
            activity_type: "wellness".to_string(),
            category: "mental_health".to_string(),
            instructions: vec![
                "Find quiet space".to_string(),
                "Focus on breathing".to_string(),
            ],
            tips: vec!["Reduces stress".to_string(), "Improves focus".to_string()],
            difficulty_level: "easy".to_string(),
            // Stress impact is negative: the practice lowers stress
            impact_on_goals: BTreeMap::from([
                ("stress".to_string(), -0.5),
                ("wellness".to_string(), 0.6),
            ]),
            time_of_day: "anytime".to_string(),
            frequency: "daily".to_string(),
            is_required: false,
            completion_criteria: vec!["10 minutes of practice completed".to_string()],
        }],
        hydration_goals: vec![HydrationGoal {
            daily_target: weekday::HYDRATION_TARGET_ML,
            timing_recommendations: owned(&weekday::HYDRATION_TIMING),
            quality_guidelines: vec![
                "Filtered water".to_string(),
                "Room temperature".to_string(),
            ],
            tracking_method: "Water bottle tracking".to_string(),
        }],
        sleep_targets: SleepTarget {
            target_duration: weekday::SLEEP_DURATION_HOURS,
            bedtime_range: weekday::BEDTIME_RANGE.to_string(),
            wake_time_range: weekday::WAKE_TIME_RANGE.to_string(),
            sleep_hygiene_practices: vec![
                "No screens 1h before bed".to_string(),
                "Cool room".to_string(),
            ],
            environment_recommendations: vec![
                "Comfortable mattress".to_string(),
                "Blackout curtains".to_string(),
            ],
        },
    }
}

// The weekend template ships with empty activity lists on purpose: the
// original content was authored for weekdays only, and downstream
// output-compatibility checks depend on the empty weekend lists.
fn build_weekend_template() -> DayTemplate {
    DayTemplate {
        morning_routine: vec![],
        meals: vec![],
        workouts: vec![],
        evening_routine: vec![],
        wellness_activities: vec![],
        hydration_goals: vec![],
        sleep_targets: SleepTarget {
            target_duration: weekend::SLEEP_DURATION_HOURS,
            bedtime_range: weekend::BEDTIME_RANGE.to_string(),
            wake_time_range: weekend::WAKE_TIME_RANGE.to_string(),
            sleep_hygiene_practices: owned(&weekend::SLEEP_HYGIENE),
            environment_recommendations: owned(&weekend::SLEEP_ENVIRONMENT),
        },
    }
}

fn build_adaptation_rules() -> AdaptationRules {
    AdaptationRules {
        compliance_thresholds: ComplianceThresholds {
            excellent: adaptation::THRESHOLD_EXCELLENT,
            good: adaptation::THRESHOLD_GOOD,
            needs_improvement: adaptation::THRESHOLD_NEEDS_IMPROVEMENT,
            poor: adaptation::THRESHOLD_POOR,
        },
        adjustment_triggers: AdjustmentTriggers {
            timeline_extension: owned(&adaptation::TIMELINE_EXTENSION),
            intensity_increase: owned(&adaptation::INTENSITY_INCREASE),
            intensity_decrease: owned(&adaptation::INTENSITY_DECREASE),
            plan_modification: owned(&adaptation::PLAN_MODIFICATION),
        },
    }
}

fn build_progression_rules() -> ProgressionRules {
    ProgressionRules {
        weekly_progression: WeeklyProgression {
            intensity_increase_percentage: progression::INTENSITY_INCREASE_PCT,
            volume_increase_percentage: progression::VOLUME_INCREASE_PCT,
            complexity_increase: true,
        },
        plateau_handling: PlateauHandling {
            detection_criteria: owned(&progression::PLATEAU_DETECTION),
            adjustment_strategies: owned(&progression::PLATEAU_STRATEGIES),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanType;

    fn calc(weeks: u32) -> PlanCalculation {
        PlanCalculation {
            duration_weeks: weeks,
            plan_type: PlanType::HealthTransformation,
            timeline_preference: "gradual".to_string(),
            expected_outcomes: vec!["Sustainable weight loss".to_string()],
            key_milestones: vec!["First measurable weight change".to_string()],
        }
    }

    #[test]
    fn test_week_key_completeness() {
        for weeks in [1, 4, 12, 24] {
            let doc = generate(&calc(weeks));
            assert!(doc.validate(weeks).is_ok(), "failed for {weeks} weeks");
            for week in 1..=weeks {
                assert!(doc.weekly_structure.contains_key(&week.to_string()));
            }
        }
    }

    #[test]
    fn test_phase_boundaries_for_twelve_weeks() {
        assert_eq!(Phase::for_week(1, 12), Phase::Introduction);
        assert_eq!(Phase::for_week(2, 12), Phase::Introduction);
        assert_eq!(Phase::for_week(3, 12), Phase::Introduction);
        assert_eq!(Phase::for_week(4, 12), Phase::Building);
        assert_eq!(Phase::for_week(7, 12), Phase::Building);
        assert_eq!(Phase::for_week(9, 12), Phase::Building);
        assert_eq!(Phase::for_week(10, 12), Phase::Optimization);
        assert_eq!(Phase::for_week(11, 12), Phase::Maintenance);
        assert_eq!(Phase::for_week(12, 12), Phase::Maintenance);
    }

    #[test]
    fn test_intensity_stays_moderate_through_maintenance() {
        let doc = generate(&calc(12));
        assert_eq!(
            doc.weekly_structure["1"].intensity_level,
            IntensityLevel::Low
        );
        assert_eq!(
            doc.weekly_structure["2"].intensity_level,
            IntensityLevel::Low
        );
        assert_eq!(
            doc.weekly_structure["3"].intensity_level,
            IntensityLevel::Moderate
        );
        // Maintenance weeks do not taper
        assert_eq!(
            doc.weekly_structure["12"].intensity_level,
            IntensityLevel::Moderate
        );
    }

    #[test]
    fn test_overview_copies_expected_outcomes() {
        let doc = generate(&calc(8));
        assert_eq!(
            doc.overview.expected_outcomes,
            vec!["Sustainable weight loss".to_string()]
        );
        assert!(doc.overview.description.contains("8-week"));
        assert_eq!(doc.overview.key_principles.len(), 4);
    }

    #[test]
    fn test_weekly_milestone_strings_interpolate_phase() {
        let doc = generate(&calc(12));
        let week7 = &doc.weekly_structure["7"];
        assert_eq!(week7.milestones[0], "Week 7 milestone");
        assert_eq!(week7.milestones[1], "building phase progress");
        assert_eq!(
            week7.weekly_goals[1],
            "Maintain building phase standards"
        );
    }

    #[test]
    fn test_weekend_template_is_empty_except_sleep() {
        let doc = generate(&calc(8));
        let weekend = &doc.daily_templates.weekend;
        assert!(weekend.morning_routine.is_empty());
        assert!(weekend.meals.is_empty());
        assert!(weekend.workouts.is_empty());
        assert!(weekend.evening_routine.is_empty());
        assert!(weekend.wellness_activities.is_empty());
        assert!(weekend.hydration_goals.is_empty());
        assert_eq!(weekend.sleep_targets.bedtime_range, "10:30 PM - 11:30 PM");
    }

    #[test]
    fn test_weekday_template_content() {
        let doc = generate(&calc(8));
        let weekday = &doc.daily_templates.weekday;
        assert_eq!(weekday.hydration_goals[0].daily_target, 2500);
        assert!((weekday.meals[0].nutrition.calories - 350.0).abs() < f64::EPSILON);
        assert_eq!(weekday.workouts[0].calories_burned_estimate, 200);
        assert_eq!(weekday.total_activities(), 5);
    }

    #[test]
    fn test_phase_string_tables() {
        assert_eq!(
            Phase::Introduction.focus_areas(),
            ["Habit establishment", "Baseline assessment", "Education"]
        );
        assert_eq!(
            Phase::Building.focus_areas(),
            ["Progressive improvement", "Skill development", "Consistency"]
        );
        assert_eq!(
            Phase::Optimization.key_activities(),
            ["Advanced techniques", "Performance testing", "Refinement"]
        );
        assert_eq!(
            Phase::Maintenance.key_activities(),
            ["Routine maintenance", "Long-term planning", "Adaptation"]
        );
    }

    #[test]
    fn test_weekday_template_strings() {
        let doc = generate(&calc(8));
        let weekday = &doc.daily_templates.weekday;

        let hydration = &weekday.morning_routine[0];
        assert_eq!(hydration.category, "wellness");
        assert!((hydration.impact_on_goals["hydration"] - 1.0).abs() < f64::EPSILON);
        assert!((hydration.impact_on_goals["energy"] - 0.5).abs() < f64::EPSILON);
        assert_eq!(hydration.completion_criteria, vec!["500ml water consumed"]);

        let breakfast = &weekday.meals[0];
        assert_eq!(breakfast.name, "Healthy Breakfast");
        assert_eq!(breakfast.ingredients[1].unit, "medium");
        assert_eq!(breakfast.prep_time, 10);
        assert_eq!(breakfast.cook_time, 5);

        assert_eq!(weekday.workouts[0].name, "Morning Workout");
        assert_eq!(weekday.workouts[0].equipment_needed, vec!["bodyweight"]);

        let reflection = &weekday.evening_routine[0];
        assert_eq!(reflection.title, "Daily Reflection");
        assert_eq!(reflection.category, "mental_health");

        let mindfulness = &weekday.wellness_activities[0];
        assert_eq!(mindfulness.id, "mindfulness");
        assert!((mindfulness.impact_on_goals["stress"] + 0.5).abs() < f64::EPSILON);
        assert!((mindfulness.impact_on_goals["wellness"] - 0.6).abs() < f64::EPSILON);

        assert_eq!(
            weekday.hydration_goals[0].tracking_method,
            "Water bottle tracking"
        );
        assert_eq!(
            weekday.sleep_targets.sleep_hygiene_practices,
            vec!["No screens 1h before bed", "Cool room"]
        );
        assert_eq!(
            weekday.sleep_targets.environment_recommendations,
            vec!["Comfortable mattress", "Blackout curtains"]
        );
    }

    #[test]
    fn test_rule_tables_match_contract() {
        let doc = generate(&calc(8));
        assert_eq!(doc.adaptation_rules.compliance_thresholds.excellent, 90);
        assert_eq!(doc.adaptation_rules.compliance_thresholds.good, 70);
        assert_eq!(
            doc.progression_rules
                .weekly_progression
                .intensity_increase_percentage,
            5
        );
        assert!(doc.progression_rules.weekly_progression.complexity_increase);
        assert_eq!(
            doc.adaptation_rules.adjustment_triggers.plan_modification.len(),
            3
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let calculation = calc(12);
        assert_eq!(generate(&calculation), generate(&calculation));
    }
}
