// ABOUTME: Core domain models for health plans and daily executions
// ABOUTME: Defines plan/execution records, status enums, and request-side profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Domain Models
//!
//! Persistent records (`HealthPlan`, `DailyPlanExecution`) and the request-side
//! types they are built from (`UserProfile`, `PlanCalculation`). The nested
//! plan document itself lives in [`crate::plan::document`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::document::{MonthlyAssessment, PlanDocument, WeeklyMilestone};

/// Classification of a user's stated goal into a plan category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Significant measurable change (weight loss, body composition)
    HealthTransformation,
    /// Long-term management of a chronic condition
    DiseaseManagement,
    /// Strength, endurance, and fitness development
    FitnessBuilding,
    /// Default catch-all for unmatched goals
    GeneralWellness,
}

impl PlanType {
    /// Database/wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HealthTransformation => "health_transformation",
            Self::DiseaseManagement => "disease_management",
            Self::FitnessBuilding => "fitness_building",
            Self::GeneralWellness => "general_wellness",
        }
    }

    /// Human-readable form used in plan names ("health transformation")
    #[must_use]
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Parse the database representation
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "health_transformation" => Some(Self::HealthTransformation),
            "disease_management" => Some(Self::DiseaseManagement),
            "fitness_building" => Some(Self::FitnessBuilding),
            "general_wellness" => Some(Self::GeneralWellness),
            _ => None,
        }
    }
}

/// Lifecycle status of a health plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Plan is in progress
    Active,
    /// Plan is temporarily on hold
    Paused,
    /// Plan reached its end
    Completed,
    /// User walked away from the plan
    Abandoned,
}

impl PlanStatus {
    /// Database representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        }
    }

    /// Parse the database representation
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "completed" => Some(Self::Completed),
            "abandoned" => Some(Self::Abandoned),
            _ => None,
        }
    }
}

/// Completion status of a single day's execution row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// Not yet started
    Pending,
    /// Partially completed
    InProgress,
    /// All activities completed
    Completed,
    /// Day was skipped
    Skipped,
}

impl ExecutionStatus {
    /// Database representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }

    /// Parse the database representation
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "skipped" => Some(Self::Skipped),
            _ => None,
        }
    }
}

/// User profile fields relevant to plan generation
///
/// All fields except `id` are optional; the upstream onboarding flow may not
/// have collected them yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile owner
    pub id: String,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Self-reported gender
    #[serde(default)]
    pub gender: Option<String>,
    /// Height in centimeters (free-form, as collected)
    #[serde(default)]
    pub height_cm: Option<String>,
    /// Weight in kilograms (free-form, as collected)
    #[serde(default)]
    pub weight_kg: Option<String>,
    /// Known chronic conditions
    #[serde(default)]
    pub chronic_conditions: Option<Vec<String>>,
    /// Stated health goals from onboarding
    #[serde(default)]
    pub health_goals: Option<Vec<String>>,
    /// Dietary preference (vegetarian, balanced, ...)
    #[serde(default)]
    pub diet_type: Option<String>,
    /// Preferred workout time of day
    #[serde(default)]
    pub workout_time: Option<String>,
    /// How flexible the user's routine is
    #[serde(default)]
    pub routine_flexibility: Option<String>,
}

/// Result of classifying a free-text goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCalculation {
    /// Plan length in weeks, always >= 1
    pub duration_weeks: u32,
    /// Classified plan category
    pub plan_type: PlanType,
    /// Pace preference: gradual, moderate, or aggressive
    pub timeline_preference: String,
    /// Human-readable expected outcomes, never empty
    pub expected_outcomes: Vec<String>,
    /// Human-readable key milestones, never empty
    pub key_milestones: Vec<String>,
}

/// A saved health plan (root aggregate, one row per generation request)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display name: "{plan type}: {goal}"
    pub plan_name: String,
    /// Plan category
    pub plan_type: PlanType,
    /// Verbatim user goal text
    pub primary_goal: String,
    /// Derived secondary goals
    pub secondary_goals: Vec<String>,
    /// First day of the plan
    pub start_date: NaiveDate,
    /// `start_date` + `duration_weeks` * 7 days
    pub target_end_date: NaiveDate,
    /// Plan length in weeks
    pub duration_weeks: u32,
    /// The nested plan document
    pub plan_data: PlanDocument,
    /// One milestone per week
    pub weekly_milestones: Vec<WeeklyMilestone>,
    /// ceil(`duration_weeks` / 4) assessment templates
    pub monthly_assessments: Vec<MonthlyAssessment>,
    /// Lifecycle status
    pub status: PlanStatus,
    /// 0-100, maintained by downstream compliance tracking
    pub overall_progress_percentage: f64,
    /// 0-100, maintained by downstream compliance tracking
    pub weekly_compliance_rate: f64,
    /// 0-100, maintained by downstream compliance tracking
    pub monthly_compliance_rate: f64,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

/// One day's materialized snapshot of plan activities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlanExecution {
    /// Execution row identifier
    pub id: Uuid,
    /// Parent plan
    pub plan_id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar date, unique per plan
    pub execution_date: NaiveDate,
    /// Week of the plan this date falls in (1-based)
    pub week_number: u32,
    /// ISO day of week, 1=Monday .. 7=Sunday
    pub day_of_week: u32,
    /// Morning + evening routines, snapshotted at creation
    pub daily_activities: serde_json::Value,
    /// Meals, snapshotted at creation
    pub daily_meals: serde_json::Value,
    /// Workouts, snapshotted at creation
    pub daily_workouts: serde_json::Value,
    /// Wellness activities, snapshotted at creation
    pub daily_wellness: serde_json::Value,
    /// Count of completed activities, starts at 0
    pub activities_completed: u32,
    /// Total scheduled activities for the day
    pub total_activities: u32,
    /// Day completion status
    pub status: ExecutionStatus,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_plan_type_roundtrip() {
        for plan_type in [
            PlanType::HealthTransformation,
            PlanType::DiseaseManagement,
            PlanType::FitnessBuilding,
            PlanType::GeneralWellness,
        ] {
            assert_eq!(PlanType::from_str_opt(plan_type.as_str()), Some(plan_type));
        }
        assert_eq!(PlanType::from_str_opt("quick_win"), None);
    }

    #[test]
    fn test_plan_type_display_name() {
        assert_eq!(
            PlanType::HealthTransformation.display_name(),
            "health transformation"
        );
    }

    #[test]
    fn test_status_serde_representation() {
        let json = serde_json::to_string(&ExecutionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(PlanStatus::Abandoned.as_str(), "abandoned");
    }
}
