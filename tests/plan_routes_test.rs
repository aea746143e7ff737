// ABOUTME: HTTP integration tests for plan generation and retrieval routes
// ABOUTME: Exercises authentication, validation, and ownership checks through the router

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;

use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use vitaplan::config::environment::{
    AuthConfig, DatabaseConfig, LlmConfig, ServerConfig, DEV_USER_ID,
};
use vitaplan::database::Database;
use vitaplan::resources::ServerResources;
use vitaplan::routes;

/// Build a router backed by an in-memory database
///
/// Config is constructed by hand so tests stay independent of process
/// environment variables.
async fn test_router(allow_dev_identity: bool) -> axum::Router {
    let config = ServerConfig {
        http_port: 0,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        },
        auth: AuthConfig {
            allow_dev_identity,
            dev_user_id: DEV_USER_ID.parse().unwrap(),
        },
        llm: LlmConfig {
            enabled: false,
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4".to_string(),
            generation_timeout: Duration::from_secs(5),
        },
    };
    let database = Database::new(&config.database.url).await.unwrap();
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    routes::router(resources)
}

fn generate_body(goal: &str) -> Value {
    json!({
        "user_goal": goal,
        "user_profile": {
            "id": "profile-1",
            "full_name": "Test User",
            "age": 34
        }
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router(false).await;

    let response = AxumTestRequest::get("/health").send(router).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_readiness_endpoint_probes_database() {
    let router = test_router(false).await;

    let response = AxumTestRequest::get("/ready").send(router).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn test_generate_requires_authentication() {
    let router = test_router(false).await;

    let response = AxumTestRequest::post("/api/plans/generate")
        .json(&generate_body("get healthy"))
        .send(router)
        .await;

    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_generate_rejects_invalid_user_id_header() {
    let router = test_router(false).await;

    let response = AxumTestRequest::post("/api/plans/generate")
        .header("authorization", "Bearer not-a-uuid")
        .json(&generate_body("get healthy"))
        .send(router)
        .await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_generate_rejects_empty_goal() {
    let router = test_router(false).await;

    let response = AxumTestRequest::post("/api/plans/generate")
        .header("authorization", &format!("Bearer {}", Uuid::new_v4()))
        .json(&generate_body("   "))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("user_goal"));
}

#[tokio::test]
async fn test_generate_rejects_missing_profile() {
    let router = test_router(false).await;

    let response = AxumTestRequest::post("/api/plans/generate")
        .header("authorization", &format!("Bearer {}", Uuid::new_v4()))
        .json(&json!({ "user_goal": "get healthy" }))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("user_profile"));
}

#[tokio::test]
async fn test_generate_with_explicit_user_id() {
    let router = test_router(false).await;
    let user_id = Uuid::new_v4();

    let response = AxumTestRequest::post("/api/plans/generate")
        .header("authorization", &format!("Bearer {user_id}"))
        .json(&generate_body("I want to lose 10kg safely"))
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["plan"]["user_id"], user_id.to_string());
    assert_eq!(body["plan"]["plan_type"], "health_transformation");
    assert_eq!(body["plan"]["duration_weeks"], 16);
    assert_eq!(body["plan"]["status"], "active");
}

#[tokio::test]
async fn test_dev_identity_used_when_enabled() {
    let router = test_router(true).await;

    let response = AxumTestRequest::post("/api/plans/generate")
        .json(&generate_body("feel better"))
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["plan"]["user_id"], DEV_USER_ID);
}

#[tokio::test]
async fn test_get_plan_roundtrip() {
    let router = test_router(false).await;
    let user_id = Uuid::new_v4();

    let response = AxumTestRequest::post("/api/plans/generate")
        .header("authorization", &format!("Bearer {user_id}"))
        .json(&generate_body("build muscle"))
        .send(router.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let plan_id = body["plan"]["id"].as_str().unwrap().to_string();

    let response = AxumTestRequest::get(&format!("/api/plans/{plan_id}"))
        .header("authorization", &format!("Bearer {user_id}"))
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["plan"]["id"], plan_id);
    assert_eq!(body["plan"]["plan_type"], "fitness_building");
}

#[tokio::test]
async fn test_get_plan_hides_other_users_plans() {
    let router = test_router(false).await;
    let owner = Uuid::new_v4();

    let response = AxumTestRequest::post("/api/plans/generate")
        .header("authorization", &format!("Bearer {owner}"))
        .json(&generate_body("manage blood pressure"))
        .send(router.clone())
        .await;
    let body: Value = response.json();
    let plan_id = body["plan"]["id"].as_str().unwrap().to_string();

    // A different authenticated user gets a 404, not a 403
    let response = AxumTestRequest::get(&format!("/api/plans/{plan_id}"))
        .header("authorization", &format!("Bearer {}", Uuid::new_v4()))
        .send(router)
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_get_unknown_plan_returns_not_found() {
    let router = test_router(false).await;

    let response = AxumTestRequest::get(&format!("/api/plans/{}", Uuid::new_v4()))
        .header("authorization", &format!("Bearer {}", Uuid::new_v4()))
        .send(router)
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_get_executions_returns_first_week() {
    let router = test_router(false).await;
    let user_id = Uuid::new_v4();

    let response = AxumTestRequest::post("/api/plans/generate")
        .header("authorization", &format!("Bearer {user_id}"))
        .json(&generate_body("feel better"))
        .send(router.clone())
        .await;
    let body: Value = response.json();
    let plan_id = body["plan"]["id"].as_str().unwrap().to_string();

    let response = AxumTestRequest::get(&format!("/api/plans/{plan_id}/executions"))
        .header("authorization", &format!("Bearer {user_id}"))
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let executions = body["executions"].as_array().unwrap();
    assert_eq!(executions.len(), 7);
    for execution in executions {
        assert_eq!(execution["week_number"], 1);
        assert_eq!(execution["status"], "pending");
    }
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let router = test_router(false).await;

    let response = AxumTestRequest::options("/api/plans/generate")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
}
