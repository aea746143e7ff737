// ABOUTME: Main library entry point for the Vitaplan health planning service
// ABOUTME: Goal classification, plan generation with AI fallback, and plan persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Vitaplan Server
//!
//! A health-plan generation service: given a free-text goal and a user
//! profile, it classifies the goal into a plan type and duration, produces a
//! multi-week plan document (via an external LLM with a deterministic
//! structured fallback), derives weekly milestones and monthly assessments,
//! persists the plan, and materializes the first week of daily execution
//! rows.
//!
//! ## Architecture
//!
//! - **plan**: the core pipeline (classifier, generator, milestones,
//!   initializer)
//! - **llm**: pluggable text-generation backend behind one trait
//! - **database**: SQLite storage for plans and execution rows
//! - **routes**: the HTTP surface
//! - **config** / **logging**: environment-driven setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use vitaplan::config::environment::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("Vitaplan configured for HTTP port {}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// SQLite storage for plans and execution rows
pub mod database;

/// Error types and HTTP error mapping
pub mod errors;

/// LLM provider abstraction and the OpenAI-compatible client
pub mod llm;

/// Logging configuration and subscriber setup
pub mod logging;

/// Domain data model
pub mod models;

/// Plan generation pipeline
pub mod plan;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;
