// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness reports process health, readiness probes the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for service monitoring
//!
//! Liveness (`/health`) answers as long as the process runs; readiness
//! (`/ready`) also probes the database so load balancers stop routing to an
//! instance whose storage is gone.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .route("/ready", get(Self::ready_handler))
            .with_state(resources)
    }

    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let database_ok = sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(resources.database.pool())
            .await
            .is_ok();

        let status = if database_ok {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };

        (
            status,
            Json(serde_json::json!({
                "status": if database_ok { "ready" } else { "degraded" },
                "database": database_ok,
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
    }
}
