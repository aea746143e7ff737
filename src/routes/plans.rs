// ABOUTME: Plan route handlers for generation and retrieval endpoints
// ABOUTME: Caller identity comes from a bearer uuid header or the dev identity flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plan routes
//!
//! `POST /api/plans/generate` runs the full generation pipeline;
//! `GET /api/plans/:id` and `GET /api/plans/:id/executions` read back the
//! persisted artifacts. Identity comes from an upstream-issued
//! `Authorization: Bearer <uuid>` header; when the development identity flag
//! is set, requests without one are attributed to the fixed development user
//! instead of rejected.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{DailyPlanExecution, HealthPlan, PlanCalculation, UserProfile};
use crate::resources::ServerResources;

/// Request body for plan generation
#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    /// Free-text goal, required and non-empty
    #[serde(default)]
    pub user_goal: Option<String>,
    /// Profile of the requesting user
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
    /// Pre-computed classification; the server classifies when absent
    #[serde(default)]
    pub plan_calculation: Option<PlanCalculation>,
}

/// Response body wrapping a saved plan
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Always true on the success path
    pub success: bool,
    /// The saved plan
    pub plan: HealthPlan,
}

/// Response body wrapping a plan's execution rows
#[derive(Debug, Serialize)]
pub struct ExecutionsResponse {
    /// Always true on the success path
    pub success: bool,
    /// Execution rows ordered by date
    pub executions: Vec<DailyPlanExecution>,
}

/// Plan routes implementation
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plans/generate", post(Self::generate_plan))
            .route("/api/plans/:plan_id", get(Self::get_plan))
            .route("/api/plans/:plan_id/executions", get(Self::get_executions))
            .with_state(resources)
    }

    /// Resolve the caller identity from the `Authorization: Bearer <uuid>`
    /// header, where the uuid is the upstream-gateway-issued subject. Without
    /// one, the fixed development identity applies only when the config flag
    /// opted in; otherwise the request is rejected.
    fn authenticate(
        headers: &HeaderMap,
        resources: &Arc<ServerResources>,
    ) -> Result<Uuid, AppError> {
        match headers.get("authorization").and_then(|h| h.to_str().ok()) {
            Some(raw) => {
                let token = raw
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| AppError::auth_invalid("Invalid authorization header"))?;
                Uuid::parse_str(token)
                    .map_err(|_| AppError::auth_invalid("Invalid bearer token"))
            }
            None if resources.config.auth.allow_dev_identity => {
                Ok(resources.config.auth.dev_user_id)
            }
            None => Err(AppError::auth_required()),
        }
    }

    async fn generate_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<GeneratePlanRequest>,
    ) -> Result<Json<PlanResponse>, AppError> {
        let user_id = Self::authenticate(&headers, &resources)?;

        // Field presence is validated here rather than by the extractor so
        // missing fields answer 400, not 422
        let user_goal = request
            .user_goal
            .filter(|goal| !goal.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("user_goal").with_user_id(user_id))?;
        let user_profile = request
            .user_profile
            .ok_or_else(|| AppError::missing_field("user_profile").with_user_id(user_id))?;

        let generated = resources
            .pipeline
            .run(
                user_id,
                &user_goal,
                &user_profile,
                request.plan_calculation,
                Utc::now().date_naive(),
            )
            .await?;

        info!(
            plan_id = %generated.plan.id,
            plan_type = generated.plan.plan_type.as_str(),
            "plan generated"
        );

        Ok(Json(PlanResponse {
            success: true,
            plan: generated.plan,
        }))
    }

    async fn get_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<Uuid>,
    ) -> Result<Json<PlanResponse>, AppError> {
        let user_id = Self::authenticate(&headers, &resources)?;

        let plan = resources
            .database
            .get_plan(plan_id)
            .await
            .map_err(|e| AppError::database(format!("failed to load plan: {e}")))?
            .filter(|plan| plan.user_id == user_id)
            .ok_or_else(|| AppError::not_found(format!("plan {plan_id}")))?;

        Ok(Json(PlanResponse {
            success: true,
            plan,
        }))
    }

    async fn get_executions(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<Uuid>,
    ) -> Result<Json<ExecutionsResponse>, AppError> {
        let user_id = Self::authenticate(&headers, &resources)?;

        // Ownership check before exposing execution rows
        resources
            .database
            .get_plan(plan_id)
            .await
            .map_err(|e| AppError::database(format!("failed to load plan: {e}")))?
            .filter(|plan| plan.user_id == user_id)
            .ok_or_else(|| AppError::not_found(format!("plan {plan_id}")))?;

        let executions = resources
            .database
            .get_executions_for_plan(plan_id)
            .await
            .map_err(|e| AppError::database(format!("failed to load executions: {e}")))?;

        // An empty list means the first week has not been materialized yet,
        // not corruption
        Ok(Json(ExecutionsResponse {
            success: true,
            executions,
        }))
    }
}
