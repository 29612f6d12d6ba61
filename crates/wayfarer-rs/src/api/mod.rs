//! Completion backend layer: wire types, the provider trait, and the
//! Ollama HTTP client.
//!
//! The session core depends only on [`CompletionProvider`]; everything
//! else here implements that capability over an Ollama-style `/api/chat`
//! endpoint:
//!
//! - [`Message`] / [`MessageRole`] — role-tagged prompt entries.
//! - [`ChatRequest`] — the non-streaming request body.
//! - [`OllamaClient`] — reqwest client with latency and token-usage
//!   logging, transient-failure retry per [`retry::RetryConfig`].

pub mod retry;

pub use retry::RetryConfig;

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ChatConfig;
use crate::error::{Error, Result};

// ── Message types ──────────────────────────────────────────────────

/// Role of a message entry sent to the backend.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A role-tagged entry in an assembled prompt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

// ── Request types ──────────────────────────────────────────────────

/// Chat request body for the Ollama `/api/chat` endpoint.
#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    /// Always `false`: the session treats completion as one blocking call.
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChatOptions>,
}

/// Sampling options forwarded to the backend.
#[derive(Serialize, Debug, Default)]
pub struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

// ── Response types ─────────────────────────────────────────────────

/// Raw backend response (internal deserialization target).
#[derive(Deserialize, Debug)]
struct RawChatResponse {
    message: Option<RawResponseMessage>,
    error: Option<String>,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Deserialize, Debug)]
struct RawResponseMessage {
    content: Option<String>,
}

/// Clean return type from [`OllamaClient::chat`].
#[derive(Debug)]
pub struct ChatCompletion {
    pub content: String,
    pub prompt_eval_count: Option<u32>,
    pub eval_count: Option<u32>,
}

// ── Provider trait ─────────────────────────────────────────────────

/// Boxed future returned by [`CompletionProvider::complete`].
///
/// Type alias to keep trait signatures and implementations readable.
pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

/// Text-completion capability the session depends on.
///
/// The session issues at most one outstanding call at a time and treats
/// it as blocking; implementations may be network-bound internally.
/// Failures surface as [`Error::Backend`] and the session records no
/// assistant turn for a failed call.
pub trait CompletionProvider: Send + Sync {
    /// Produce the assistant's raw reply text for an assembled prompt.
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a>;
}

impl<T: CompletionProvider + ?Sized> CompletionProvider for &T {
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a> {
        (**self).complete(messages)
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for an Ollama-style chat backend.
///
/// Constructed once at session start and passed explicitly into the
/// session; holds the model, sampling, and retry settings it was
/// configured with.
pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    retry: RetryConfig,
}

impl OllamaClient {
    /// Create a client from validated configuration.
    pub fn new(config: ChatConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .user_agent("wayfarer/0.1")
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Backend(format!("failed to build HTTP client: {e}")))?;
        let endpoint = format!("{}/api/chat", config.base_url.trim_end_matches('/'));
        Ok(Self {
            client,
            endpoint,
            model: config.model,
            temperature: config.temperature,
            retry: config.retry,
        })
    }

    /// Send one chat completion request.
    pub async fn chat(&self, messages: &[Message]) -> Result<ChatCompletion> {
        debug!(
            "LLM request: model={}, messages={}, temp={}",
            self.model,
            messages.len(),
            self.temperature,
        );

        let body = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            stream: false,
            options: Some(ChatOptions {
                temperature: Some(self.temperature),
            }),
        };
        trace!(
            "Request payload size: {} bytes",
            serde_json::to_string(&body).map_or(0, |s| s.len())
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Backend(format!("request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::Backend(format!("failed to read response: {e}")))?;

        debug!(
            "LLM response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(Error::Backend(format!("backend HTTP {status}: {text}")));
        }

        let parsed: RawChatResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Backend(format!("failed to parse response: {e}")))?;

        if let Some(err) = parsed.error {
            return Err(Error::Backend(format!("backend error: {err}")));
        }

        if parsed.prompt_eval_count.is_some() || parsed.eval_count.is_some() {
            debug!(
                "Token usage: prompt={}, completion={}",
                parsed.prompt_eval_count.unwrap_or(0),
                parsed.eval_count.unwrap_or(0),
            );
        }

        let content = parsed
            .message
            .and_then(|m| m.content)
            .unwrap_or_default();
        debug!("LLM output: {} chars text", content.len());

        Ok(ChatCompletion {
            content,
            prompt_eval_count: parsed.prompt_eval_count,
            eval_count: parsed.eval_count,
        })
    }
}

impl CompletionProvider for OllamaClient {
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a> {
        Box::pin(async move {
            let completion = retry::retry_call(&self.retry, || self.chat(messages)).await?;
            Ok(completion.content)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors() {
        let sys = Message::system("hello");
        assert_eq!(sys.role, MessageRole::System);
        assert_eq!(sys.content, "hello");

        let user = Message::user("world");
        assert_eq!(user.role, MessageRole::User);

        let assistant = Message::assistant("reply");
        assert_eq!(assistant.role, MessageRole::Assistant);
        assert_eq!(assistant.content, "reply");
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(Message::system("s")).unwrap();
        assert_eq!(json["role"], "system");
        let json = serde_json::to_value(Message::assistant("a")).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[test]
    fn chat_request_serializes_non_streaming_shape() {
        let req = ChatRequest {
            model: "test-model".into(),
            messages: vec![Message::user("hi")],
            stream: false,
            options: Some(ChatOptions {
                temperature: Some(0.7),
            }),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["stream"], false);
        let temperature = json["options"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn chat_request_skips_absent_options() {
        let req = ChatRequest {
            model: "test-model".into(),
            messages: vec![],
            stream: false,
            options: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("options").is_none());
    }

    #[test]
    fn raw_response_parses_ollama_shape() {
        let text = r#"{
            "model": "deepseek-r1:1.5b",
            "created_at": "2025-03-01T12:00:00Z",
            "message": {"role": "assistant", "content": "Bonjour!"},
            "done": true,
            "prompt_eval_count": 42,
            "eval_count": 17
        }"#;
        let parsed: RawChatResponse = serde_json::from_str(text).unwrap();
        assert_eq!(parsed.message.unwrap().content.as_deref(), Some("Bonjour!"));
        assert_eq!(parsed.prompt_eval_count, Some(42));
        assert_eq!(parsed.eval_count, Some(17));
        assert!(parsed.error.is_none());
    }

    #[test]
    fn raw_response_carries_backend_error() {
        let parsed: RawChatResponse =
            serde_json::from_str(r#"{"error": "model 'nope' not found"}"#).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("model 'nope' not found"));
    }

    #[test]
    fn client_rejects_invalid_config() {
        let config = ChatConfig::default().with_temperature(2.0);
        assert!(matches!(
            OllamaClient::new(config),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client =
            OllamaClient::new(ChatConfig::new("m", "http://localhost:11434/")).unwrap();
        assert_eq!(client.endpoint, "http://localhost:11434/api/chat");
    }
}
