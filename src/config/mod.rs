// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration with typed sections and summary logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration module
//!
//! Environment-only configuration: every setting comes from an environment
//! variable with a usable default.

/// Environment and server configuration
pub mod environment;

pub use environment::{AuthConfig, DatabaseConfig, LlmConfig, ServerConfig, DEV_USER_ID};
