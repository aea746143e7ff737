// ABOUTME: Daily plan execution table schema and row operations
// ABOUTME: The first-week batch insert runs inside one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::models::{DailyPlanExecution, ExecutionStatus};

impl Database {
    /// Create the daily execution table
    pub(super) async fn migrate_executions(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS daily_plan_executions (
                id TEXT PRIMARY KEY,
                plan_id TEXT NOT NULL REFERENCES health_plans(id) ON DELETE CASCADE,
                user_id TEXT NOT NULL,
                execution_date DATE NOT NULL,
                week_number INTEGER NOT NULL,
                day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 1 AND 7),
                daily_activities TEXT NOT NULL,
                daily_meals TEXT NOT NULL,
                daily_workouts TEXT NOT NULL,
                daily_wellness TEXT NOT NULL,
                activities_completed INTEGER NOT NULL DEFAULT 0,
                total_activities INTEGER NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                UNIQUE(plan_id, execution_date)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_daily_plan_executions_plan_id \
             ON daily_plan_executions(plan_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a batch of execution rows as one transaction. A failure on any
    /// row rolls back the whole batch so a plan never ends up with a partial
    /// week materialized.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any insert fails; no rows are
    /// kept in that case.
    pub async fn create_executions(&self, executions: &[DailyPlanExecution]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for execution in executions {
            sqlx::query(
                r"
                INSERT INTO daily_plan_executions (
                    id, plan_id, user_id, execution_date, week_number, day_of_week,
                    daily_activities, daily_meals, daily_workouts, daily_wellness,
                    activities_completed, total_activities, status
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ",
            )
            .bind(execution.id.to_string())
            .bind(execution.plan_id.to_string())
            .bind(execution.user_id.to_string())
            .bind(execution.execution_date)
            .bind(i64::from(execution.week_number))
            .bind(i64::from(execution.day_of_week))
            .bind(serde_json::to_string(&execution.daily_activities)?)
            .bind(serde_json::to_string(&execution.daily_meals)?)
            .bind(serde_json::to_string(&execution.daily_workouts)?)
            .bind(serde_json::to_string(&execution.daily_wellness)?)
            .bind(i64::from(execution.activities_completed))
            .bind(i64::from(execution.total_activities))
            .bind(execution.status.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Fetch every execution row for a plan, ordered by date
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded.
    pub async fn get_executions_for_plan(&self, plan_id: Uuid) -> Result<Vec<DailyPlanExecution>> {
        let rows = sqlx::query(
            "SELECT * FROM daily_plan_executions WHERE plan_id = ? ORDER BY execution_date",
        )
        .bind(plan_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_execution).collect()
    }

    /// Convert a database row to a `DailyPlanExecution`
    fn row_to_execution(row: &sqlx::sqlite::SqliteRow) -> Result<DailyPlanExecution> {
        let id: String = row.get("id");
        let plan_id: String = row.get("plan_id");
        let user_id: String = row.get("user_id");
        let execution_date: NaiveDate = row.get("execution_date");
        let week_number: i64 = row.get("week_number");
        let day_of_week: i64 = row.get("day_of_week");
        let daily_activities: String = row.get("daily_activities");
        let daily_meals: String = row.get("daily_meals");
        let daily_workouts: String = row.get("daily_workouts");
        let daily_wellness: String = row.get("daily_wellness");
        let activities_completed: i64 = row.get("activities_completed");
        let total_activities: i64 = row.get("total_activities");
        let status: String = row.get("status");

        Ok(DailyPlanExecution {
            id: Uuid::parse_str(&id)?,
            plan_id: Uuid::parse_str(&plan_id)?,
            user_id: Uuid::parse_str(&user_id)?,
            execution_date,
            week_number: u32::try_from(week_number)?,
            day_of_week: u32::try_from(day_of_week)?,
            daily_activities: serde_json::from_str(&daily_activities)?,
            daily_meals: serde_json::from_str(&daily_meals)?,
            daily_workouts: serde_json::from_str(&daily_workouts)?,
            daily_wellness: serde_json::from_str(&daily_wellness)?,
            activities_completed: u32::try_from(activities_completed)?,
            total_activities: u32::try_from(total_activities)?,
            status: ExecutionStatus::from_str_opt(&status)
                .ok_or_else(|| anyhow!("unknown execution status: {status}"))?,
        })
    }
}
