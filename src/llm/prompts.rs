// ABOUTME: Prompt construction for the plan generation AI path
// ABOUTME: Serializes goal, profile, and classification into system and user prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Generation Prompts
//!
//! Builds the two-message prompt the AI path sends: a system message
//! carrying the coaching role and the user's profile, and a user message
//! carrying the classified goal and required plan sections. The model is
//! instructed to answer with a single JSON object matching the plan
//! document schema.

use crate::models::{PlanCalculation, UserProfile};

fn or_default(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn list_or_default(values: Option<&[String]>, fallback: &str) -> String {
    match values {
        Some(v) if !v.is_empty() => v.join(", "),
        _ => fallback.to_string(),
    }
}

/// System prompt carrying the coaching role and the user's profile
#[must_use]
pub fn system_prompt(profile: &UserProfile) -> String {
    format!(
        "You are an expert health coach and nutritionist with 20+ years of experience. \
         Create a comprehensive, evidence-based health plan with realistic timelines and \
         detailed daily structures.\n\n\
         User Profile:\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Height: {height} cm\n\
         - Weight: {weight} kg\n\
         - Chronic Conditions: {conditions}\n\
         - Health Goals: {goals}\n\
         - Diet Type: {diet}\n\
         - Workout Time: {workout_time}\n\
         - Routine Flexibility: {flexibility}\n\n\
         Respond with a single JSON object containing the keys overview, \
         weekly_structure, daily_templates, adaptation_rules, and progression_rules. \
         Do not include any text outside the JSON object.",
        age = profile
            .age
            .map_or_else(|| "Not specified".to_string(), |a| a.to_string()),
        gender = or_default(profile.gender.as_deref(), "Not specified"),
        height = or_default(profile.height_cm.as_deref(), "Not specified"),
        weight = or_default(profile.weight_kg.as_deref(), "Not specified"),
        conditions = list_or_default(profile.chronic_conditions.as_deref(), "None"),
        goals = list_or_default(profile.health_goals.as_deref(), "General wellness"),
        diet = or_default(profile.diet_type.as_deref(), "Balanced"),
        workout_time = or_default(profile.workout_time.as_deref(), "Flexible"),
        flexibility = or_default(profile.routine_flexibility.as_deref(), "Moderate"),
    )
}

/// User prompt carrying the classified goal and required plan sections
#[must_use]
pub fn user_prompt(goal: &str, calculation: &PlanCalculation) -> String {
    format!(
        "Create a comprehensive {weeks}-week {plan_type} plan for: \"{goal}\"\n\n\
         Expected outcomes: {outcomes}\n\
         Key milestones: {milestones}\n\n\
         Provide a detailed, structured plan that includes:\n\
         - Weekly progression phases for every week from 1 to {weeks}\n\
         - Daily activity templates for weekday and weekend\n\
         - Meal plans with nutritional information\n\
         - Workout routines with exercises\n\
         - Wellness activities\n\
         - Hydration and sleep targets\n\
         - Adaptation rules and compliance thresholds\n\n\
         Make it realistic, evidence-based, and tailored to the user's profile.",
        weeks = calculation.duration_weeks,
        plan_type = calculation.plan_type.as_str(),
        goal = goal,
        outcomes = calculation.expected_outcomes.join(", "),
        milestones = calculation.key_milestones.join(", "),
    )
}
