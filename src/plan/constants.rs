// ABOUTME: Deterministic plan-generation constants used by the fallback generator
// ABOUTME: Phase tables, template item values, and adaptation rule text in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Generation Constants
//!
//! Every fixed string and number the deterministic generator emits lives
//! here, grouped by the plan section it feeds. Keeping the values out of the
//! generator logic makes the fallback output auditable at a glance.

/// Overview section text
pub mod overview {
    /// Guiding principles listed in every plan overview
    pub const KEY_PRINCIPLES: [&str; 4] = [
        "Gradual progression",
        "Sustainable practices",
        "Evidence-based approaches",
        "Personalized adaptation",
    ];

    /// Success metrics listed in every plan overview
    pub const SUCCESS_METRICS: [&str; 4] = [
        "Weekly compliance rate > 70%",
        "Progressive milestone achievement",
        "Sustained behavior change",
        "Measurable health improvements",
    ];

    /// Safety guidance listed in every plan overview
    pub const SAFETY_CONSIDERATIONS: [&str; 4] = [
        "Monitor for adverse reactions",
        "Adjust intensity based on feedback",
        "Regular progress assessments",
        "Professional consultation when needed",
    ];
}

/// Phase boundary fractions of elapsed plan duration
pub mod phases {
    /// Weeks in the first quarter are introduction
    pub const INTRODUCTION_END: f64 = 0.25;
    /// Weeks up to three quarters are building
    pub const BUILDING_END: f64 = 0.75;
    /// Weeks up to 90% are optimization, the rest maintenance
    pub const OPTIMIZATION_END: f64 = 0.9;

    /// Weeks at or below this number run at low intensity
    pub const LOW_INTENSITY_WEEKS: u32 = 2;
}

/// Weekday template values
pub mod weekday {
    /// Morning hydration activity duration in minutes
    pub const HYDRATION_DURATION_MIN: u32 = 5;
    /// Morning hydration amount described in the activity
    pub const HYDRATION_AMOUNT_ML: u32 = 500;
    /// Breakfast oats quantity in grams
    pub const OATS_QUANTITY_G: f64 = 50.0;
    /// Breakfast calories
    pub const BREAKFAST_CALORIES: f64 = 350.0;
    /// Breakfast protein in grams
    pub const BREAKFAST_PROTEIN_G: f64 = 12.0;
    /// Breakfast carbohydrates in grams
    pub const BREAKFAST_CARBS_G: f64 = 55.0;
    /// Breakfast fat in grams
    pub const BREAKFAST_FAT_G: f64 = 10.0;
    /// Breakfast fiber in grams
    pub const BREAKFAST_FIBER_G: f64 = 8.0;
    /// Breakfast sugar in grams
    pub const BREAKFAST_SUGAR_G: f64 = 15.0;
    /// Breakfast sodium in milligrams
    pub const BREAKFAST_SODIUM_MG: f64 = 100.0;
    /// Workout duration in minutes
    pub const WORKOUT_DURATION_MIN: u32 = 30;
    /// Workout calorie estimate
    pub const WORKOUT_CALORIES: u32 = 200;
    /// Evening reflection duration in minutes
    pub const REFLECTION_DURATION_MIN: u32 = 5;
    /// Mindfulness practice duration in minutes
    pub const MINDFULNESS_DURATION_MIN: u32 = 10;
    /// Daily hydration target in milliliters
    pub const HYDRATION_TARGET_ML: u32 = 2500;
    /// When to drink through the day
    pub const HYDRATION_TIMING: [&str; 3] = ["Morning", "Pre-meals", "Post-workout"];
    /// Target sleep duration in hours
    pub const SLEEP_DURATION_HOURS: u32 = 8;
    /// Weekday bedtime window
    pub const BEDTIME_RANGE: &str = "10:00 PM - 11:00 PM";
    /// Weekday wake window
    pub const WAKE_TIME_RANGE: &str = "6:00 AM - 7:00 AM";
}

/// Weekend template values
pub mod weekend {
    /// Target sleep duration in hours
    pub const SLEEP_DURATION_HOURS: u32 = 8;
    /// Weekend bedtime window
    pub const BEDTIME_RANGE: &str = "10:30 PM - 11:30 PM";
    /// Weekend wake window
    pub const WAKE_TIME_RANGE: &str = "7:00 AM - 8:00 AM";
    /// Sleep hygiene practices
    pub const SLEEP_HYGIENE: [&str; 2] = ["Consistent schedule", "Relaxation time"];
    /// Bedroom environment guidance
    pub const SLEEP_ENVIRONMENT: [&str; 2] = ["Comfortable temperature", "Good ventilation"];
}

/// Adaptation rule values
pub mod adaptation {
    /// Excellent compliance threshold in percent
    pub const THRESHOLD_EXCELLENT: u32 = 90;
    /// Good compliance threshold in percent
    pub const THRESHOLD_GOOD: u32 = 70;
    /// Needs-improvement compliance threshold in percent
    pub const THRESHOLD_NEEDS_IMPROVEMENT: u32 = 50;
    /// Poor compliance threshold in percent
    pub const THRESHOLD_POOR: u32 = 30;

    /// Conditions that extend the plan timeline
    pub const TIMELINE_EXTENSION: [&str; 3] = [
        "Compliance rate < 50% for 2 consecutive weeks",
        "User reports excessive difficulty",
        "Health concerns arise",
    ];

    /// Conditions that raise intensity
    pub const INTENSITY_INCREASE: [&str; 3] = [
        "Compliance rate > 90% for 2 consecutive weeks",
        "User reports exercises too easy",
        "Faster than expected progress",
    ];

    /// Conditions that lower intensity
    pub const INTENSITY_DECREASE: [&str; 3] = [
        "User reports excessive fatigue",
        "Compliance rate declining",
        "Health issues arise",
    ];

    /// Conditions that modify the plan wholesale
    pub const PLAN_MODIFICATION: [&str; 3] =
        ["Goal changes", "Lifestyle changes", "Health status changes"];
}

/// Progression rule values
pub mod progression {
    /// Intensity increase per week, percent
    pub const INTENSITY_INCREASE_PCT: u32 = 5;
    /// Volume increase per week, percent
    pub const VOLUME_INCREASE_PCT: u32 = 10;

    /// How a plateau is detected
    pub const PLATEAU_DETECTION: [&str; 3] = [
        "No progress for 2 consecutive weeks",
        "Declining motivation",
        "Stagnant measurements",
    ];

    /// How a plateau is broken
    pub const PLATEAU_STRATEGIES: [&str; 4] = [
        "Increase variety",
        "Adjust intensity",
        "Add new challenges",
        "Review and modify goals",
    ];
}

/// Weekly milestone values
pub mod milestones {
    /// Success criteria attached to every weekly milestone
    pub const SUCCESS_CRITERIA: [&str; 2] =
        ["Complete 70% of activities", "Maintain consistency"];
    /// How milestone achievement is measured
    pub const MEASUREMENT_METHOD: &str = "Compliance tracking";
    /// Weekly milestone category
    pub const CATEGORY: &str = "behavioral";
    /// Every Nth week is a high-importance checkpoint
    pub const CHECKPOINT_INTERVAL: u32 = 4;
}

/// Monthly assessment values
pub mod assessments {
    /// Measurements the user must record each month
    pub const REQUIRED_MEASUREMENTS: [&str; 3] = ["weight", "energy_level", "satisfaction"];
    /// Measurements the user may record each month
    pub const OPTIONAL_MEASUREMENTS: [&str; 2] = ["body_measurements", "fitness_tests"];
    /// Conditions that trigger a plan adjustment after an assessment
    pub const ADJUSTMENT_TRIGGERS: [&str; 3] =
        ["Low compliance", "User feedback", "Goal changes"];
    /// Weight of the goal progress area
    pub const GOAL_PROGRESS_WEIGHT: f64 = 0.4;
    /// Weight of the compliance area
    pub const COMPLIANCE_WEIGHT: f64 = 0.3;
    /// Weight of the health metrics area
    pub const HEALTH_METRICS_WEIGHT: f64 = 0.3;
}

/// Secondary goal sets keyed by primary goal keywords
pub mod secondary_goals {
    /// Goals paired with weight-focused primary goals
    pub const WEIGHT: [&str; 4] = [
        "Improve nutrition",
        "Increase physical activity",
        "Better sleep",
        "Stress management",
    ];

    /// Goals paired with fitness-focused primary goals
    pub const FITNESS: [&str; 4] = [
        "Build strength",
        "Improve flexibility",
        "Better recovery",
        "Nutrition optimization",
    ];

    /// Goals paired with disease-management primary goals
    pub const DISEASE: [&str; 4] = [
        "Blood sugar control",
        "Weight management",
        "Medication adherence",
        "Lifestyle modification",
    ];

    /// Goals paired with any other primary goal
    pub const DEFAULT: [&str; 4] = [
        "Overall wellness",
        "Energy improvement",
        "Better habits",
        "Health maintenance",
    ];
}
