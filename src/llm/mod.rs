// ABOUTME: LLM provider abstraction for pluggable text-generation backends
// ABOUTME: Defines the chat completion contract the plan pipeline calls through
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # LLM Provider Interface
//!
//! The plan pipeline talks to its text-generation backend through the
//! [`LlmProvider`] trait so the AI path stays swappable and mockable. One
//! concrete provider ships: an OpenAI-compatible chat completion client,
//! which covers OpenAI, Groq, and local servers (Ollama, vLLM) behind the
//! same wire format.

mod openai;
pub mod prompts;

pub use openai::{OpenAiCompatibleConfig, OpenAiCompatibleProvider};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// End-user message
    User,
    /// Model response message
    Assistant,
}

impl MessageRole {
    /// Wire-format role string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced the message
    pub role: MessageRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Chat completion request configuration
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Conversation messages in order
    pub messages: Vec<ChatMessage>,
    /// Model override; provider default when `None`
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Completion token cap
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request with default model and sampling settings
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Token accounting returned by the provider, when available
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated in the completion
    pub completion_tokens: u32,
    /// Prompt plus completion
    pub total_tokens: u32,
}

/// Chat completion response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Generated text
    pub content: String,
    /// Model that produced the response
    pub model: String,
    /// Token accounting, when the provider reports it
    pub usage: Option<TokenUsage>,
    /// Why generation stopped
    pub finish_reason: Option<String>,
}

/// Contract a text-generation backend must implement
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short machine name, e.g. "openai"
    fn name(&self) -> &'static str;

    /// Human-readable provider name
    fn display_name(&self) -> &'static str;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;

    /// Perform a non-streaming chat completion
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, a non-success API status, or
    /// an unparseable response body.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
