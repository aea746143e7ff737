// ABOUTME: End-to-end tests for the plan generation pipeline
// ABOUTME: Covers classification, fallback generation, persistence, and first-week initialization

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use vitaplan::database::Database;
use vitaplan::errors::AppError;
use vitaplan::llm::{ChatRequest, ChatResponse, LlmProvider};
use vitaplan::models::{ExecutionStatus, PlanStatus, PlanType, UserProfile};
use vitaplan::plan::{classifier, generator, GenerationSource, PlanPipeline};

/// Monday, so day-of-week routing starts at 1
fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

async fn test_database() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

fn pipeline_without_provider(database: Database) -> PlanPipeline {
    PlanPipeline::new(database, None, Duration::from_secs(5))
}

/// Provider that always fails with a connection-style error
struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn display_name(&self) -> &'static str {
        "Failing Test Provider"
    }

    fn default_model(&self) -> &str {
        "test-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service("failing", "connection refused"))
    }
}

/// Provider that returns prose instead of a plan document
struct GarbageProvider;

#[async_trait]
impl LlmProvider for GarbageProvider {
    fn name(&self) -> &'static str {
        "garbage"
    }

    fn display_name(&self) -> &'static str {
        "Garbage Test Provider"
    }

    fn default_model(&self) -> &str {
        "test-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Ok(ChatResponse {
            content: "Here is your plan! Week 1: start slow.".to_string(),
            model: "test-model".to_string(),
            usage: None,
            finish_reason: Some("stop".to_string()),
        })
    }
}

/// Provider that echoes back a valid document for the classified goal
struct ValidProvider;

#[async_trait]
impl LlmProvider for ValidProvider {
    fn name(&self) -> &'static str {
        "valid"
    }

    fn display_name(&self) -> &'static str {
        "Valid Test Provider"
    }

    fn default_model(&self) -> &str {
        "test-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        // The user message embeds the goal; regenerate the matching document
        let goal = &request.messages.last().unwrap().content;
        let calculation = classifier::classify(goal);
        let document = generator::generate(&calculation);
        Ok(ChatResponse {
            content: format!(
                "```json\n{}\n```",
                serde_json::to_string(&document).unwrap()
            ),
            model: "test-model".to_string(),
            usage: None,
            finish_reason: Some("stop".to_string()),
        })
    }
}

/// Provider that never responds within a reasonable test timeout
struct HangingProvider;

#[async_trait]
impl LlmProvider for HangingProvider {
    fn name(&self) -> &'static str {
        "hanging"
    }

    fn display_name(&self) -> &'static str {
        "Hanging Test Provider"
    }

    fn default_model(&self) -> &str {
        "test-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(AppError::external_service("hanging", "unreachable"))
    }
}

#[tokio::test]
async fn test_weight_loss_goal_end_to_end() {
    let database = test_database().await;
    let pipeline = pipeline_without_provider(database.clone());
    let user_id = Uuid::new_v4();

    let generated = pipeline
        .run(
            user_id,
            "I want to lose 10kg safely",
            &UserProfile::default(),
            None,
            start_date(),
        )
        .await
        .unwrap();

    let plan = &generated.plan;
    assert_eq!(plan.plan_type, PlanType::HealthTransformation);
    assert_eq!(plan.duration_weeks, 16);
    assert_eq!(plan.status, PlanStatus::Active);
    assert_eq!(
        plan.plan_name,
        "health transformation: I want to lose 10kg safely"
    );
    assert_eq!(
        plan.target_end_date,
        start_date() + chrono::Duration::days(16 * 7)
    );
    assert_eq!(plan.weekly_milestones.len(), 16);
    assert_eq!(plan.monthly_assessments.len(), 4);
    assert!(plan.plan_data.validate(plan.duration_weeks).is_ok());

    // Persisted row matches the returned aggregate
    let stored = database.get_plan(plan.id).await.unwrap().unwrap();
    assert_eq!(stored.user_id, user_id);
    assert_eq!(stored.plan_type, PlanType::HealthTransformation);
    assert_eq!(stored.duration_weeks, 16);
}

#[tokio::test]
async fn test_no_provider_uses_fallback_source() {
    let database = test_database().await;
    let pipeline = pipeline_without_provider(database);

    let generated = pipeline
        .run(
            Uuid::new_v4(),
            "feel better",
            &UserProfile::default(),
            None,
            start_date(),
        )
        .await
        .unwrap();

    match generated.source {
        GenerationSource::Fallback { reason } => {
            assert!(reason.contains("no provider configured"));
        }
        GenerationSource::External => panic!("expected fallback without a provider"),
    }
}

#[tokio::test]
async fn test_classification_always_produces_a_plan() {
    let database = test_database().await;
    let pipeline = pipeline_without_provider(database);

    for goal in ["", "xyzzy", "learn to juggle", "run a marathon quickly"] {
        let generated = pipeline
            .run(
                Uuid::new_v4(),
                goal,
                &UserProfile::default(),
                None,
                start_date(),
            )
            .await
            .unwrap();

        let plan = &generated.plan;
        assert!(plan.duration_weeks >= 1);
        assert!(plan.plan_data.validate(plan.duration_weeks).is_ok());
        assert_eq!(plan.weekly_milestones.len(), plan.duration_weeks as usize);
    }
}

#[tokio::test]
async fn test_first_week_executions_persisted() {
    let database = test_database().await;
    let pipeline = pipeline_without_provider(database.clone());
    let user_id = Uuid::new_v4();

    let generated = pipeline
        .run(
            user_id,
            "build muscle",
            &UserProfile::default(),
            None,
            start_date(),
        )
        .await
        .unwrap();

    let executions = database
        .get_executions_for_plan(generated.plan.id)
        .await
        .unwrap();
    assert_eq!(executions.len(), 7);

    for (offset, execution) in executions.iter().enumerate() {
        assert_eq!(execution.user_id, user_id);
        assert_eq!(execution.week_number, 1);
        assert_eq!(execution.status, ExecutionStatus::Pending);
        assert_eq!(execution.activities_completed, 0);
        assert_eq!(
            execution.execution_date,
            start_date() + chrono::Duration::days(offset as i64)
        );
    }

    // Monday start: days 1-5 carry the weekday template, 6-7 are empty
    assert_eq!(executions[0].day_of_week, 1);
    assert!(executions[0].total_activities > 0);
    assert_eq!(executions[5].day_of_week, 6);
    assert_eq!(executions[5].total_activities, 0);
    assert_eq!(executions[6].day_of_week, 7);
    assert_eq!(executions[6].total_activities, 0);
}

#[tokio::test]
async fn test_provider_error_falls_back() {
    let database = test_database().await;
    let pipeline = PlanPipeline::new(
        database,
        Some(Arc::new(FailingProvider)),
        Duration::from_secs(5),
    );

    let generated = pipeline
        .run(
            Uuid::new_v4(),
            "manage my diabetes",
            &UserProfile::default(),
            None,
            start_date(),
        )
        .await
        .unwrap();

    assert_eq!(generated.plan.plan_type, PlanType::DiseaseManagement);
    match generated.source {
        GenerationSource::Fallback { reason } => {
            assert!(reason.contains("provider error"));
        }
        GenerationSource::External => panic!("expected fallback when the provider fails"),
    }
    // Fallback still satisfies the structural contract
    assert!(generated
        .plan
        .plan_data
        .validate(generated.plan.duration_weeks)
        .is_ok());
}

#[tokio::test]
async fn test_malformed_response_falls_back() {
    let database = test_database().await;
    let pipeline = PlanPipeline::new(
        database,
        Some(Arc::new(GarbageProvider)),
        Duration::from_secs(5),
    );

    let generated = pipeline
        .run(
            Uuid::new_v4(),
            "get fit",
            &UserProfile::default(),
            None,
            start_date(),
        )
        .await
        .unwrap();

    match generated.source {
        GenerationSource::Fallback { reason } => {
            assert!(reason.contains("malformed"));
        }
        GenerationSource::External => panic!("expected fallback on unparseable content"),
    }
}

#[tokio::test]
async fn test_valid_provider_response_is_used() {
    let database = test_database().await;
    let pipeline = PlanPipeline::new(
        database,
        Some(Arc::new(ValidProvider)),
        Duration::from_secs(5),
    );

    let generated = pipeline
        .run(
            Uuid::new_v4(),
            "improve my endurance",
            &UserProfile::default(),
            None,
            start_date(),
        )
        .await
        .unwrap();

    assert_eq!(generated.source, GenerationSource::External);
    assert_eq!(generated.plan.plan_type, PlanType::FitnessBuilding);
    assert!(generated
        .plan
        .plan_data
        .validate(generated.plan.duration_weeks)
        .is_ok());
}

#[tokio::test]
async fn test_slow_provider_times_out_and_falls_back() {
    let database = test_database().await;
    let pipeline = PlanPipeline::new(
        database,
        Some(Arc::new(HangingProvider)),
        Duration::from_millis(50),
    );

    let generated = pipeline
        .run(
            Uuid::new_v4(),
            "sleep better",
            &UserProfile::default(),
            None,
            start_date(),
        )
        .await
        .unwrap();

    match generated.source {
        GenerationSource::Fallback { reason } => {
            assert!(reason.contains("timed out"));
        }
        GenerationSource::External => panic!("expected fallback on timeout"),
    }
}

#[tokio::test]
async fn test_plans_persist_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("plans.db").display());
    let user_id = Uuid::new_v4();

    let plan_id = {
        let database = Database::new(&url).await.unwrap();
        let pipeline = pipeline_without_provider(database);
        pipeline
            .run(
                user_id,
                "feel better",
                &UserProfile::default(),
                None,
                start_date(),
            )
            .await
            .unwrap()
            .plan
            .id
    };

    // A fresh connection sees the saved plan and its execution rows
    let database = Database::new(&url).await.unwrap();
    let stored = database.get_plan(plan_id).await.unwrap().unwrap();
    assert_eq!(stored.user_id, user_id);
    let executions = database.get_executions_for_plan(plan_id).await.unwrap();
    assert_eq!(executions.len(), 7);
}

#[tokio::test]
async fn test_caller_supplied_calculation_skips_classifier() {
    let database = test_database().await;
    let pipeline = pipeline_without_provider(database);

    // Goal text says weight loss, but the caller forces a wellness plan
    let calculation = classifier::classify("feel better overall");
    let generated = pipeline
        .run(
            Uuid::new_v4(),
            "I want to lose weight",
            &UserProfile::default(),
            Some(calculation.clone()),
            start_date(),
        )
        .await
        .unwrap();

    assert_eq!(generated.plan.plan_type, PlanType::GeneralWellness);
    assert_eq!(generated.plan.duration_weeks, calculation.duration_weeks);
}
