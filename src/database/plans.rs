// ABOUTME: Health plan table schema and row operations
// ABOUTME: JSON document columns round-trip through serde_json at the row boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::models::{HealthPlan, PlanStatus, PlanType};

impl Database {
    /// Create the health plan table
    pub(super) async fn migrate_plans(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_plans (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                plan_name TEXT NOT NULL,
                plan_type TEXT NOT NULL CHECK (plan_type IN (
                    'health_transformation', 'disease_management',
                    'fitness_building', 'general_wellness'
                )),
                primary_goal TEXT NOT NULL,
                secondary_goals TEXT NOT NULL,
                start_date DATE NOT NULL,
                target_end_date DATE NOT NULL,
                duration_weeks INTEGER NOT NULL CHECK (duration_weeks >= 1),
                plan_data TEXT NOT NULL,
                weekly_milestones TEXT NOT NULL,
                monthly_assessments TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'active',
                overall_progress_percentage REAL NOT NULL DEFAULT 0,
                weekly_compliance_rate REAL NOT NULL DEFAULT 0,
                monthly_compliance_rate REAL NOT NULL DEFAULT 0,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_health_plans_user_id ON health_plans(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new plan row. Every generation request creates a new row;
    /// there is no upsert.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub async fn create_plan(&self, plan: &HealthPlan) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO health_plans (
                id, user_id, plan_name, plan_type, primary_goal, secondary_goals,
                start_date, target_end_date, duration_weeks, plan_data,
                weekly_milestones, monthly_assessments, status,
                overall_progress_percentage, weekly_compliance_rate,
                monthly_compliance_rate, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(plan.id.to_string())
        .bind(plan.user_id.to_string())
        .bind(&plan.plan_name)
        .bind(plan.plan_type.as_str())
        .bind(&plan.primary_goal)
        .bind(serde_json::to_string(&plan.secondary_goals)?)
        .bind(plan.start_date)
        .bind(plan.target_end_date)
        .bind(i64::from(plan.duration_weeks))
        .bind(serde_json::to_string(&plan.plan_data)?)
        .bind(serde_json::to_string(&plan.weekly_milestones)?)
        .bind(serde_json::to_string(&plan.monthly_assessments)?)
        .bind(plan.status.as_str())
        .bind(plan.overall_progress_percentage)
        .bind(plan.weekly_compliance_rate)
        .bind(plan.monthly_compliance_rate)
        .bind(plan.created_at)
        .execute(&self.pool)
        .await
        .context("failed to insert health plan")?;

        Ok(())
    }

    /// Fetch a plan by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded.
    pub async fn get_plan(&self, plan_id: Uuid) -> Result<Option<HealthPlan>> {
        let row = sqlx::query("SELECT * FROM health_plans WHERE id = ?")
            .bind(plan_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_plan).transpose()
    }

    /// Fetch all plans for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded.
    pub async fn get_plans_for_user(&self, user_id: Uuid) -> Result<Vec<HealthPlan>> {
        let rows =
            sqlx::query("SELECT * FROM health_plans WHERE user_id = ? ORDER BY created_at DESC")
                .bind(user_id.to_string())
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(Self::row_to_plan).collect()
    }

    /// Convert a database row to a `HealthPlan`
    fn row_to_plan(row: &sqlx::sqlite::SqliteRow) -> Result<HealthPlan> {
        let id: String = row.get("id");
        let user_id: String = row.get("user_id");
        let plan_type: String = row.get("plan_type");
        let secondary_goals: String = row.get("secondary_goals");
        let start_date: NaiveDate = row.get("start_date");
        let target_end_date: NaiveDate = row.get("target_end_date");
        let duration_weeks: i64 = row.get("duration_weeks");
        let plan_data: String = row.get("plan_data");
        let weekly_milestones: String = row.get("weekly_milestones");
        let monthly_assessments: String = row.get("monthly_assessments");
        let status: String = row.get("status");

        Ok(HealthPlan {
            id: Uuid::parse_str(&id)?,
            user_id: Uuid::parse_str(&user_id)?,
            plan_name: row.get("plan_name"),
            plan_type: PlanType::from_str_opt(&plan_type)
                .ok_or_else(|| anyhow!("unknown plan_type: {plan_type}"))?,
            primary_goal: row.get("primary_goal"),
            secondary_goals: serde_json::from_str(&secondary_goals)?,
            start_date,
            target_end_date,
            duration_weeks: u32::try_from(duration_weeks)?,
            plan_data: serde_json::from_str(&plan_data)?,
            weekly_milestones: serde_json::from_str(&weekly_milestones)?,
            monthly_assessments: serde_json::from_str(&monthly_assessments)?,
            status: PlanStatus::from_str_opt(&status)
                .ok_or_else(|| anyhow!("unknown plan status: {status}"))?,
            overall_progress_percentage: row.get("overall_progress_percentage"),
            weekly_compliance_rate: row.get("weekly_compliance_rate"),
            monthly_compliance_rate: row.get("monthly_compliance_rate"),
            created_at: row.get("created_at"),
        })
    }
}
