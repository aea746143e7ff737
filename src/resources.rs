// ABOUTME: Shared server resources constructed once at startup and Arc-shared
// ABOUTME: Route handlers receive these through axum state
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Server Resources
//!
//! Dependencies every route handler needs, constructed once at startup and
//! shared behind an `Arc`. The pipeline owns its own clone of the database
//! handle; the pool inside is shared.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use crate::plan::PlanPipeline;

/// Shared server resources
pub struct ServerResources {
    /// Plan and execution storage
    pub database: Database,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// The plan generation pipeline
    pub pipeline: PlanPipeline,
}

impl ServerResources {
    /// Wire up resources from configuration, building the LLM provider only
    /// when the external path is enabled.
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let provider: Option<Arc<dyn LlmProvider>> = if config.llm.enabled {
            let provider_config = OpenAiCompatibleConfig {
                base_url: config.llm.base_url.clone(),
                api_key: config.llm.api_key.clone(),
                model: config.llm.model.clone(),
            };
            Some(Arc::new(OpenAiCompatibleProvider::new(provider_config)))
        } else {
            None
        };

        let pipeline = PlanPipeline::new(
            database.clone(),
            provider,
            config.llm.generation_timeout,
        );

        Self {
            database,
            config,
            pipeline,
        }
    }
}
