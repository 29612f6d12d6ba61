//! The per-session chat loop core.
//!
//! [`Session`] owns the transcript for one interactive session and runs
//! one turn at a time: record the user turn, rebuild the full prompt from
//! the persona and every prior turn, call the completion provider, strip
//! reasoning markup, record and return the reply. Turns are strictly
//! sequential; the provider call is the only suspension point and at most
//! one request is in flight.
//!
//! The full prompt is rebuilt from the whole transcript on every turn
//! rather than maintained incrementally, so the context sent to the
//! backend always matches the transcript exactly. Changing that would
//! change the observable prompt content, so callers should not cache
//! assembled prompts across turns.

use tracing::debug;

use crate::api::CompletionProvider;
use crate::chat::Transcript;
use crate::error::Result;
use crate::persona::PersonaSpec;
use crate::{prompt, sanitize};

/// Case-insensitive check for the interactive exit command.
///
/// The CLIs check this before a turn is recorded, so an exit input never
/// reaches the completion provider.
pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("exit")
}

/// One interactive chat session over a completion provider.
///
/// The provider is constructed once at session start and passed in
/// explicitly; substituting a scripted provider is the testing seam.
pub struct Session<C> {
    provider: C,
    transcript: Transcript,
}

impl<C: CompletionProvider> Session<C> {
    /// Start a session with an empty transcript.
    pub fn new(provider: C) -> Self {
        Self {
            provider,
            transcript: Transcript::new(),
        }
    }

    /// Start a session whose transcript opens with an assistant greeting.
    pub fn with_greeting(provider: C, greeting: impl Into<String>) -> Self {
        Self {
            provider,
            transcript: Transcript::seeded(greeting),
        }
    }

    /// The conversation history so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run one turn and return the sanitized reply.
    ///
    /// The persona is taken per turn because the itinerary variant
    /// rebuilds it from the latest request parameters; a fixed persona
    /// can simply be passed unchanged each time.
    ///
    /// On failure the user turn stays recorded and no assistant turn is
    /// appended; the session keeps accepting turns afterwards.
    pub async fn turn(&mut self, persona: &PersonaSpec, input: &str) -> Result<String> {
        self.transcript.push_user(input);
        let messages = prompt::assemble(persona, &self.transcript)?;
        debug!("session turn: {} prompt entries", messages.len());

        let raw = self.provider.complete(&messages).await?;
        let reply = sanitize::sanitize_response(&raw);
        self.transcript.push_assistant(&reply);
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_command_is_case_insensitive() {
        assert!(is_exit("exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit("Exit"));
        assert!(is_exit("  exit  "));
    }

    #[test]
    fn non_exit_inputs_are_not_exit() {
        assert!(!is_exit("exits"));
        assert!(!is_exit("quit"));
        assert!(!is_exit(""));
        assert!(!is_exit("paris"));
    }
}
