//! Delegation gateway to the external generation service
//!
//! One responsibility: given a system role, a user prompt, and an output
//! contract, attempt exactly one chat-completions request and return either
//! a validated object or a `DelegationError`. Never retries; the request
//! timeout is the only suspension bound. Every failure class — missing
//! credential, transport, status, body parse, contract violation — maps to
//! its own variant so callers can log it, but they all trigger the same
//! fallback.

use crate::config::AiConfig;
use anyhow::Result;
use gymtrack_shared::errors::DelegationError;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Bearer credential for the generation service.
///
/// Wrapped in `SecretString` so the key never appears in debug output.
/// Threaded explicitly into generator calls as `Option<&ApiCredential>`.
#[derive(Clone, Debug)]
pub struct ApiCredential(SecretString);

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::new(key.into()))
    }

    fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Output contract both generation paths must satisfy.
///
/// `enforce` checks bounds and required-non-empty fields after the body has
/// parsed. A violation is a schema mismatch, never a partial result.
pub trait Contract: DeserializeOwned {
    fn enforce(&self) -> Result<(), String>;
}

// ============================================================================
// Wire types (chat-completions format)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

// ============================================================================
// Gateway
// ============================================================================

/// Client for single-shot delegation requests
pub struct DelegationGateway {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl DelegationGateway {
    /// Build a gateway from the AI configuration
    pub fn new(config: &AiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// Attempt one delegation request and parse the result against `T`'s
    /// contract.
    ///
    /// The response body must carry `choices[0].message.content`, and that
    /// content must itself parse as JSON satisfying the contract. Any
    /// deviation returns a `DelegationError`; nothing partial escapes.
    pub async fn request<T: Contract>(
        &self,
        credential: Option<&ApiCredential>,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<T, DelegationError> {
        let credential = credential.ok_or(DelegationError::MissingCredential)?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: self.max_tokens,
        };

        debug!(model = %self.model, "sending delegation request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| DelegationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DelegationError::Status(status.as_u16()));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| DelegationError::UnparsableBody(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                DelegationError::UnparsableBody("response carried no message content".to_string())
            })?;

        let value: T =
            serde_json::from_str(&content).map_err(|e| DelegationError::SchemaMismatch(e.to_string()))?;
        value.enforce().map_err(DelegationError::SchemaMismatch)?;

        Ok(value)
    }
}
