// ABOUTME: Keyword-based goal classifier mapping free text to a plan calculation
// ABOUTME: First matching rule wins; unmatched text degrades to a general wellness default
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Goal Classifier
//!
//! Maps a free-text health goal to a [`PlanCalculation`] through
//! case-insensitive keyword matching against a priority-ordered rule table.
//! Classification never fails: input that matches no rule gets the default
//! general wellness classification, logged but not surfaced as an error,
//! because the caller has no recovery path for a classification failure
//! mid-pipeline.

use crate::models::{PlanCalculation, PlanType};

/// Pace the user signalled in the goal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pace {
    Gradual,
    Moderate,
    Aggressive,
}

impl Pace {
    fn as_str(self) -> &'static str {
        match self {
            Self::Gradual => "gradual",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

/// Words that signal the user wants results fast
const AGGRESSIVE_WORDS: [&str; 3] = ["quickly", "fast", "asap"];

/// Words that signal the user prefers a slower, safer pace
const GRADUAL_WORDS: [&str; 3] = ["safely", "slowly", "sustainable"];

/// Weight-focused goal keywords
const WEIGHT_KEYWORDS: [&str; 6] = ["weight", "lose", "kg", "pounds", "fat", "slim"];

/// Chronic condition keywords
const DISEASE_KEYWORDS: [&str; 8] = [
    "diabetes",
    "blood pressure",
    "hypertension",
    "cholesterol",
    "pcos",
    "thyroid",
    "disease",
    "manage",
];

/// Fitness-focused goal keywords
const FITNESS_KEYWORDS: [&str; 7] = [
    "muscle",
    "strength",
    "fitness",
    "endurance",
    "stamina",
    "run",
    "build",
];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

fn detect_pace(text: &str) -> Pace {
    if contains_any(text, &AGGRESSIVE_WORDS) {
        Pace::Aggressive
    } else if contains_any(text, &GRADUAL_WORDS) {
        Pace::Gradual
    } else {
        Pace::Moderate
    }
}

/// Duration in weeks for a plan type at a given pace. Aggressive picks the
/// short end of the type's range, gradual the long end.
fn duration_weeks(plan_type: PlanType, pace: Pace) -> u32 {
    match (plan_type, pace) {
        (PlanType::DiseaseManagement, Pace::Aggressive) => 12,
        (PlanType::DiseaseManagement, Pace::Moderate) => 16,
        (PlanType::DiseaseManagement, Pace::Gradual) => 24,
        // The default rule is always 8 weeks regardless of pace words
        (PlanType::GeneralWellness, _) => 8,
        (_, Pace::Aggressive) => 8,
        (_, Pace::Moderate) => 12,
        (_, Pace::Gradual) => 16,
    }
}

fn expected_outcomes(plan_type: PlanType) -> Vec<String> {
    let outcomes: &[&str] = match plan_type {
        PlanType::HealthTransformation => &[
            "Sustainable weight loss",
            "Improved body composition",
            "Better energy levels",
            "Enhanced self-confidence",
        ],
        PlanType::DiseaseManagement => &[
            "Better symptom control",
            "Stabilized health markers",
            "Improved daily energy",
            "Reduced health risks",
        ],
        PlanType::FitnessBuilding => &[
            "Increased strength",
            "Better endurance",
            "Improved body composition",
        ],
        PlanType::GeneralWellness => &[
            "Improved energy levels",
            "Better sleep quality",
            "Weight management",
        ],
    };
    outcomes.iter().map(ToString::to_string).collect()
}

fn key_milestones(plan_type: PlanType) -> Vec<String> {
    let milestones: &[&str] = match plan_type {
        PlanType::HealthTransformation => &[
            "First measurable weight change",
            "Consistent activity routine",
            "Halfway body composition check",
            "Goal weight trajectory confirmed",
        ],
        PlanType::DiseaseManagement => &[
            "Baseline markers recorded",
            "Daily management routine established",
            "Mid-plan marker review",
            "Sustained marker improvement",
        ],
        PlanType::FitnessBuilding => &[
            "Baseline fitness assessment",
            "Consistent training habit",
            "Measurable strength gains",
            "Endurance benchmark achieved",
        ],
        PlanType::GeneralWellness => &[
            "Daily routine established",
            "Consistent healthy habits",
            "Improved wellbeing check-in",
            "Sustained lifestyle change",
        ],
    };
    milestones.iter().map(ToString::to_string).collect()
}

fn calculation(plan_type: PlanType, pace: Pace) -> PlanCalculation {
    PlanCalculation {
        duration_weeks: duration_weeks(plan_type, pace),
        plan_type,
        timeline_preference: pace.as_str().to_string(),
        expected_outcomes: expected_outcomes(plan_type),
        key_milestones: key_milestones(plan_type),
    }
}

/// Classify a free-text goal. First matching rule wins; no match yields the
/// default general wellness classification (8 weeks, gradual).
#[must_use]
pub fn classify(goal_text: &str) -> PlanCalculation {
    let text = goal_text.to_lowercase();
    let pace = detect_pace(&text);

    if contains_any(&text, &WEIGHT_KEYWORDS) {
        calculation(PlanType::HealthTransformation, pace)
    } else if contains_any(&text, &DISEASE_KEYWORDS) {
        calculation(PlanType::DiseaseManagement, pace)
    } else if contains_any(&text, &FITNESS_KEYWORDS) {
        calculation(PlanType::FitnessBuilding, pace)
    } else {
        tracing::debug!("goal matched no classification rule, using default");
        calculation(PlanType::GeneralWellness, Pace::Gradual)
    }
}

/// Secondary goals paired with a classified primary goal
#[must_use]
pub fn secondary_goals(goal_text: &str, plan_type: PlanType) -> Vec<String> {
    use super::constants::secondary_goals as sg;

    let text = goal_text.to_lowercase();
    let goals: &[&str] = if contains_any(&text, &WEIGHT_KEYWORDS) {
        &sg::WEIGHT
    } else if contains_any(&text, &FITNESS_KEYWORDS) {
        &sg::FITNESS
    } else if plan_type == PlanType::DiseaseManagement {
        &sg::DISEASE
    } else {
        &sg::DEFAULT
    };
    goals.iter().map(ToString::to_string).collect()
}
