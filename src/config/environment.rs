// ABOUTME: Environment-based server configuration with typed sections
// ABOUTME: Every setting has a default so a bare environment still boots
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration for deployment-specific settings.
//!
//! All configuration comes from environment variables (with a `.env` file
//! loaded when present). Every variable has a usable default so the server
//! boots in a bare environment with an in-process SQLite file and the
//! AI path disabled.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// Placeholder identity substituted when dev identity is allowed and the
/// request carries no caller id
pub const DEV_USER_ID: &str = "9d1051c9-0241-4370-99a3-034bd2d5d001";

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default external generation timeout in seconds
const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 20;

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database settings
    pub database: DatabaseConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// External text-generation settings
    pub llm: LlmConfig,
}

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
}

/// Authentication settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// When true, requests without a caller identity are attributed to the
    /// fixed development user instead of rejected with 401. Local testing
    /// only; must stay off in production deployments.
    pub allow_dev_identity: bool,
    /// The identity substituted in development mode
    pub dev_user_id: Uuid,
}

/// External text-generation settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Whether the external path is attempted at all
    pub enabled: bool,
    /// API root of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Bearer token; empty for unauthenticated local servers
    pub api_key: String,
    /// Model requested for plan generation
    pub model: String,
    /// Per-request timeout for the generation call
    pub generation_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse (a missing variable
    /// falls back to its default instead).
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let llm_api_key = env_var_or("VITAPLAN_LLM_API_KEY", "");
        let llm_enabled = env_var_or("VITAPLAN_LLM_ENABLED", "")
            .parse()
            .unwrap_or(!llm_api_key.is_empty());

        let config = Self {
            http_port: env_var_or("VITAPLAN_HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid VITAPLAN_HTTP_PORT value")?,
            database: DatabaseConfig {
                url: env_var_or("VITAPLAN_DATABASE_URL", "sqlite:./data/vitaplan.db"),
            },
            auth: AuthConfig {
                allow_dev_identity: env_var_or("VITAPLAN_ALLOW_DEV_IDENTITY", "false")
                    .parse()
                    .context("Invalid VITAPLAN_ALLOW_DEV_IDENTITY value")?,
                dev_user_id: Uuid::parse_str(DEV_USER_ID)
                    .context("Invalid development user id")?,
            },
            llm: LlmConfig {
                enabled: llm_enabled,
                base_url: env_var_or("VITAPLAN_LLM_BASE_URL", "https://api.openai.com/v1"),
                api_key: llm_api_key,
                model: env_var_or("VITAPLAN_LLM_MODEL", "gpt-4"),
                generation_timeout: Duration::from_secs(
                    env_var_or(
                        "VITAPLAN_GENERATION_TIMEOUT_SECS",
                        &DEFAULT_GENERATION_TIMEOUT_SECS.to_string(),
                    )
                    .parse()
                    .context("Invalid VITAPLAN_GENERATION_TIMEOUT_SECS value")?,
                ),
            },
        };

        Ok(config)
    }

    /// Human-readable configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Vitaplan Server Configuration:\n\
             - HTTP Port: {}\n\
             - Database: {}\n\
             - Dev Identity: {}\n\
             - AI Generation: {}\n\
             - Generation Timeout: {}s",
            self.http_port,
            self.database.url,
            if self.auth.allow_dev_identity {
                "Allowed (local testing only)"
            } else {
                "Disabled"
            },
            if self.llm.enabled {
                self.llm.model.as_str()
            } else {
                "Disabled (deterministic fallback only)"
            },
            self.llm.generation_timeout.as_secs(),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
