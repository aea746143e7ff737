// ABOUTME: Expands a saved plan's first week into concrete per-date execution rows
// ABOUTME: Snapshots day templates by value so later template edits cannot leak back
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Daily Execution Initializer
//!
//! Materializes the first seven calendar days of a saved plan into
//! [`DailyPlanExecution`] rows. Each row carries a deep-copied snapshot of
//! that day's template lists, so mutating the parent plan afterwards never
//! retroactively changes an already-created row. Later weeks are
//! materialized lazily elsewhere.

use anyhow::Result;
use chrono::{Datelike, Days};
use uuid::Uuid;

use crate::models::{DailyPlanExecution, ExecutionStatus, HealthPlan};

/// Build the seven first-week execution rows for a saved plan.
///
/// Day of week is ISO numbered (1=Monday..7=Sunday); days 6 and 7 take the
/// weekend template, the rest the weekday template. `daily_activities`
/// merges the morning and evening routines into one list, so
/// `total_activities` sums four category counts, not five.
///
/// # Errors
///
/// Returns an error if a template list fails to serialize or the start date
/// cannot be advanced (calendar overflow).
pub fn first_week_executions(plan: &HealthPlan) -> Result<Vec<DailyPlanExecution>> {
    let mut executions = Vec::with_capacity(7);

    for offset in 0..7u64 {
        let execution_date = plan
            .start_date
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| anyhow::anyhow!("execution date out of range"))?;
        let day_of_week = execution_date.weekday().number_from_monday();
        let template = plan.plan_data.daily_templates.for_day_of_week(day_of_week);

        let mut activities = template.morning_routine.clone();
        activities.extend(template.evening_routine.iter().cloned());

        executions.push(DailyPlanExecution {
            id: Uuid::new_v4(),
            plan_id: plan.id,
            user_id: plan.user_id,
            execution_date,
            week_number: 1,
            day_of_week,
            daily_activities: serde_json::to_value(&activities)?,
            daily_meals: serde_json::to_value(&template.meals)?,
            daily_workouts: serde_json::to_value(&template.workouts)?,
            daily_wellness: serde_json::to_value(&template.wellness_activities)?,
            activities_completed: 0,
            total_activities: template.total_activities(),
            status: ExecutionStatus::Pending,
        });
    }

    Ok(executions)
}
