// ABOUTME: Plan generation domain: classification, documents, generation, persistence flow
// ABOUTME: Pipeline module wires the pieces into one request-scoped flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Generation
//!
//! The core domain of the service: turning a free-text health goal into a
//! persisted multi-week plan with first-week execution rows.
//!
//! - [`classifier`]: keyword classification of the goal
//! - [`document`]: the typed plan document model
//! - [`generator`]: deterministic fallback document generation
//! - [`milestones`]: weekly milestone and monthly assessment derivation
//! - [`initializer`]: first-week execution row materialization
//! - [`pipeline`]: the end-to-end request flow

pub mod classifier;
pub mod constants;
pub mod document;
pub mod generator;
pub mod initializer;
pub mod milestones;
pub mod pipeline;

pub use pipeline::{GeneratedPlan, GenerationError, GenerationSource, PlanPipeline};
