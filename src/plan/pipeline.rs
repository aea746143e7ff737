// ABOUTME: End-to-end plan generation pipeline from goal text to persisted plan
// ABOUTME: External generation is a tagged result; fallback is a value, not exception flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Generation Pipeline
//!
//! One linear request flow: classify the goal, attempt external generation
//! under a timeout, fall back to the deterministic generator on any failure,
//! assemble the plan aggregate, persist it, and materialize the first week
//! of execution rows.
//!
//! Which path produced the document is carried as a [`GenerationSource`]
//! value on the result, so "did we fall back?" is inspectable rather than a
//! side effect of exception handling. A persistence failure is fatal to the
//! request; an execution initialization failure is logged and tolerated,
//! since the plan is the primary artifact and execution rows can be
//! materialized lazily later.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::database::Database;
use crate::errors::AppError;
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider};
use crate::models::{HealthPlan, PlanCalculation, PlanStatus, UserProfile};

use super::classifier;
use super::document::PlanDocument;
use super::generator;
use super::initializer;
use super::milestones;

/// Sampling temperature for the external generation call
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Completion token cap for the external generation call
const GENERATION_MAX_TOKENS: u32 = 4000;

/// Why the external generation path failed
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The call did not finish within the configured timeout
    #[error("generation timed out")]
    Timeout,
    /// The provider returned an error
    #[error("provider error: {0}")]
    Provider(AppError),
    /// The response body was not valid plan document JSON
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The document parsed but violated the structural contract
    #[error("invalid document: {0}")]
    Invalid(String),
}

/// Which path produced the plan document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationSource {
    /// The external provider produced a valid document
    External,
    /// The deterministic generator was used
    Fallback {
        /// Why the external path was not used
        reason: String,
    },
}

/// A persisted plan together with its generation provenance
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    /// The saved plan aggregate
    pub plan: HealthPlan,
    /// Which path produced the plan document
    pub source: GenerationSource,
}

/// Plan generation pipeline
#[derive(Clone)]
pub struct PlanPipeline {
    database: Database,
    provider: Option<Arc<dyn LlmProvider>>,
    generation_timeout: Duration,
}

impl PlanPipeline {
    /// Create a pipeline. `provider` is `None` when no external backend is
    /// configured; every request then takes the deterministic path.
    #[must_use]
    pub fn new(
        database: Database,
        provider: Option<Arc<dyn LlmProvider>>,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            database,
            provider,
            generation_timeout,
        }
    }

    /// Run the full pipeline for one generation request.
    ///
    /// `calculation` overrides the classifier when the caller already ran
    /// classification; `start_date` anchors the plan calendar.
    ///
    /// # Errors
    ///
    /// Returns an error only when the plan row cannot be persisted. A failed
    /// external generation falls back silently (logged); a failed first-week
    /// initialization is logged but does not fail the request.
    pub async fn run(
        &self,
        user_id: Uuid,
        goal: &str,
        profile: &UserProfile,
        calculation: Option<PlanCalculation>,
        start_date: NaiveDate,
    ) -> Result<GeneratedPlan, AppError> {
        let calculation = calculation.unwrap_or_else(|| classifier::classify(goal));
        debug!(
            plan_type = calculation.plan_type.as_str(),
            duration_weeks = calculation.duration_weeks,
            "goal classified"
        );

        let (document, source) = self.generate_document(goal, profile, &calculation).await;
        match &source {
            GenerationSource::External => info!("plan document generated by external provider"),
            GenerationSource::Fallback { reason } => {
                warn!(reason, "external generation unavailable, used fallback");
            }
        }

        let plan = assemble_plan(user_id, goal, &calculation, document, start_date);

        self.database.create_plan(&plan).await.map_err(|e| {
            AppError::database(format!("failed to save plan: {e}")).with_user_id(user_id)
        })?;
        info!(plan_id = %plan.id, "plan saved");

        self.initialize_first_week(&plan).await;

        Ok(GeneratedPlan { plan, source })
    }

    /// Produce the plan document, attempting the external path once and
    /// falling back to the deterministic generator on any failure.
    async fn generate_document(
        &self,
        goal: &str,
        profile: &UserProfile,
        calculation: &PlanCalculation,
    ) -> (PlanDocument, GenerationSource) {
        let Some(provider) = &self.provider else {
            return (
                generator::generate(calculation),
                GenerationSource::Fallback {
                    reason: "no provider configured".to_string(),
                },
            );
        };

        match self
            .attempt_external(provider.as_ref(), goal, profile, calculation)
            .await
        {
            Ok(document) => (document, GenerationSource::External),
            Err(e) => (
                generator::generate(calculation),
                GenerationSource::Fallback {
                    reason: e.to_string(),
                },
            ),
        }
    }

    /// Single external generation attempt under the configured timeout
    async fn attempt_external(
        &self,
        provider: &dyn LlmProvider,
        goal: &str,
        profile: &UserProfile,
        calculation: &PlanCalculation,
    ) -> Result<PlanDocument, GenerationError> {
        let request = ChatRequest {
            messages: vec![
                ChatMessage::system(prompts::system_prompt(profile)),
                ChatMessage::user(prompts::user_prompt(goal, calculation)),
            ],
            model: None,
            temperature: Some(GENERATION_TEMPERATURE),
            max_tokens: Some(GENERATION_MAX_TOKENS),
        };

        let response = tokio::time::timeout(self.generation_timeout, provider.complete(&request))
            .await
            .map_err(|_| GenerationError::Timeout)?
            .map_err(GenerationError::Provider)?;

        parse_document(&response.content, calculation.duration_weeks)
    }

    /// Materialize the first-week execution rows. Failures are logged, not
    /// surfaced: the plan row already exists and executions can be
    /// materialized lazily later.
    async fn initialize_first_week(&self, plan: &HealthPlan) {
        let executions = match initializer::first_week_executions(plan) {
            Ok(executions) => executions,
            Err(e) => {
                error!(plan_id = %plan.id, "failed to build first-week executions: {e}");
                return;
            }
        };

        if let Err(e) = self.database.create_executions(&executions).await {
            error!(plan_id = %plan.id, "failed to insert first-week executions: {e}");
        } else {
            debug!(plan_id = %plan.id, "first-week executions initialized");
        }
    }
}

/// Parse a provider response body into a validated plan document. Tolerates
/// a Markdown code fence around the JSON.
fn parse_document(content: &str, duration_weeks: u32) -> Result<PlanDocument, GenerationError> {
    let trimmed = content.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);

    let document: PlanDocument = serde_json::from_str(json)?;
    document
        .validate(duration_weeks)
        .map_err(GenerationError::Invalid)?;
    Ok(document)
}

/// Assemble the plan aggregate from a classification and a document
#[must_use]
pub fn assemble_plan(
    user_id: Uuid,
    goal: &str,
    calculation: &PlanCalculation,
    document: PlanDocument,
    start_date: NaiveDate,
) -> HealthPlan {
    let duration_days = i64::from(calculation.duration_weeks) * 7;

    HealthPlan {
        id: Uuid::new_v4(),
        user_id,
        plan_name: format!("{}: {goal}", calculation.plan_type.display_name()),
        plan_type: calculation.plan_type,
        primary_goal: goal.to_string(),
        secondary_goals: classifier::secondary_goals(goal, calculation.plan_type),
        start_date,
        target_end_date: start_date + chrono::Duration::days(duration_days),
        duration_weeks: calculation.duration_weeks,
        plan_data: document,
        weekly_milestones: milestones::weekly_milestones(calculation),
        monthly_assessments: milestones::monthly_assessments(calculation),
        status: PlanStatus::Active,
        overall_progress_percentage: 0.0,
        weekly_compliance_rate: 0.0,
        monthly_compliance_rate: 0.0,
        created_at: chrono::Utc::now(),
    }
}
