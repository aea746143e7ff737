// ABOUTME: Derives weekly milestones and monthly assessments from a plan classification
// ABOUTME: Purely arithmetic on duration_weeks; identical regardless of generation path
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Milestone and Assessment Generator
//!
//! One milestone per plan week and one assessment per started month
//! (`ceil(duration_weeks / 4)`). No AI involvement: output depends only on
//! the classification, so it is identical whether the plan document came
//! from the external path or the deterministic fallback.

use crate::models::PlanCalculation;

use super::constants::{assessments, milestones};
use super::document::{
    AssessmentArea, AssessmentQuestion, MilestoneImportance, MonthlyAssessment, ScaleRange,
    WeeklyMilestone,
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// One milestone per week, every 4th week a high-importance checkpoint
#[must_use]
pub fn weekly_milestones(calculation: &PlanCalculation) -> Vec<WeeklyMilestone> {
    (1..=calculation.duration_weeks)
        .map(|week| WeeklyMilestone {
            week_number: week,
            title: format!("Week {week} Milestone"),
            description: format!("Key achievements for week {week}"),
            success_criteria: owned(&milestones::SUCCESS_CRITERIA),
            measurement_method: milestones::MEASUREMENT_METHOD.to_string(),
            importance: if week % milestones::CHECKPOINT_INTERVAL == 0 {
                MilestoneImportance::High
            } else {
                MilestoneImportance::Medium
            },
            category: milestones::CATEGORY.to_string(),
        })
        .collect()
}

/// One assessment per started month of the plan
#[must_use]
pub fn monthly_assessments(calculation: &PlanCalculation) -> Vec<MonthlyAssessment> {
    let months = calculation.duration_weeks.div_ceil(4);
    (1..=months)
        .map(|month| MonthlyAssessment {
            month_number: month,
            title: format!("Month {month} Assessment"),
            description: "Comprehensive review of progress".to_string(),
            assessment_areas: vec![
                AssessmentArea {
                    name: "Goal Progress".to_string(),
                    description: "Progress toward primary goal".to_string(),
                    metrics: vec!["percentage_complete".to_string()],
                    weight: assessments::GOAL_PROGRESS_WEIGHT,
                },
                AssessmentArea {
                    name: "Compliance".to_string(),
                    description: "Activity completion rate".to_string(),
                    metrics: vec!["compliance_rate".to_string()],
                    weight: assessments::COMPLIANCE_WEIGHT,
                },
                AssessmentArea {
                    name: "Health Metrics".to_string(),
                    description: "Physical health improvements".to_string(),
                    metrics: vec!["measurements".to_string()],
                    weight: assessments::HEALTH_METRICS_WEIGHT,
                },
            ],
            required_measurements: owned(&assessments::REQUIRED_MEASUREMENTS),
            optional_measurements: owned(&assessments::OPTIONAL_MEASUREMENTS),
            questionnaire: vec![
                AssessmentQuestion {
                    id: "satisfaction".to_string(),
                    question: "How satisfied are you with your progress?".to_string(),
                    question_type: "scale".to_string(),
                    scale_range: Some(ScaleRange {
                        min: 1,
                        max: 10,
                        labels: vec![
                            "Very Unsatisfied".to_string(),
                            "Very Satisfied".to_string(),
                        ],
                    }),
                    required: true,
                },
                AssessmentQuestion {
                    id: "difficulty".to_string(),
                    question: "How would you rate the difficulty level?".to_string(),
                    question_type: "scale".to_string(),
                    scale_range: Some(ScaleRange {
                        min: 1,
                        max: 10,
                        labels: vec!["Too Easy".to_string(), "Too Hard".to_string()],
                    }),
                    required: true,
                },
            ],
            adjustment_triggers: owned(&assessments::ADJUSTMENT_TRIGGERS),
        })
        .collect()
}
