// ABOUTME: Route module organization for HTTP endpoints
// ABOUTME: Assembles domain routers with CORS and request tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module
//!
//! Routes are organized by domain; each module contains route definitions
//! and thin handlers that delegate to the pipeline and storage layers.
//! [`router`] assembles the full application router with its middleware
//! stack.

/// Health and readiness routes
pub mod health;
/// Plan generation and retrieval routes
pub mod plans;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// Assemble the application router. The permissive CORS layer also answers
/// `OPTIONS` preflights with 200.
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes(resources.clone()))
        .merge(plans::PlanRoutes::routes(resources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
