//! Travel chat sessions over a locally hosted language model.
//!
//! `wayfarer-rs` is the core library behind the `wayfarer-guide` and
//! `wayfarer-itinerary` CLIs: interactive chat loops that send a persona
//! plus the running conversation to an Ollama-style backend and print the
//! reply with the model's internal reasoning stripped.
//!
//! Each turn follows the same sequence: the user line is recorded in the
//! [`Transcript`](chat::Transcript), [`prompt::assemble`] rebuilds the
//! full role-tagged prompt from the persona and every prior turn, the
//! [`CompletionProvider`](api::CompletionProvider) produces raw reply
//! text, and [`sanitize::sanitize_response`] removes `<think>` regions
//! before the reply is recorded and returned.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chat`] | [`Turn`](chat::Turn) and the session-scoped [`Transcript`](chat::Transcript) |
//! | [`persona`] | [`PersonaSpec`](persona::PersonaSpec) templates and rendering |
//! | [`prompt`] | Persona + transcript into a role-tagged message sequence |
//! | [`sanitize`] | Reasoning-markup stripping for display-ready replies |
//! | [`api`] | Wire types, the [`CompletionProvider`](api::CompletionProvider) trait, the Ollama client, retry |
//! | [`config`] | [`ChatConfig`](config::ChatConfig) backend settings |
//! | [`session`] | [`Session`](session::Session) turn composition and exit detection |
//! | [`error`] | Typed error taxonomy |
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_rs::{ChatConfig, OllamaClient, PersonaSpec, Session};
//!
//! #[tokio::main]
//! async fn main() -> wayfarer_rs::Result<()> {
//!     let client = OllamaClient::new(ChatConfig::default())?;
//!     let mut session = Session::with_greeting(&client, "Hello, traveler!");
//!     let persona = PersonaSpec::new("You are a friendly travel guide.");
//!
//!     let reply = session.turn(&persona, "Tell me about Lisbon.").await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod persona;
pub mod prompt;
pub mod sanitize;
pub mod session;

// Re-export the types the binaries touch on every line.
pub use api::{CompletionProvider, Message, MessageRole, OllamaClient};
pub use chat::{Role, Transcript, Turn};
pub use config::ChatConfig;
pub use error::{Error, Result};
pub use persona::PersonaSpec;
pub use session::Session;

// ── Constants ──────────────────────────────────────────────────────

/// Default completion model.
pub const DEFAULT_MODEL: &str = "deepseek-r1:1.5b";

/// Default backend address of a local Ollama install.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
