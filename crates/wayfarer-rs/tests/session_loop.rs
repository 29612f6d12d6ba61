//! Integration tests for the session loop.
//!
//! These tests drive [`Session`] end-to-end against scripted in-memory
//! completion providers, checking the prompt each call actually receives
//! and the transcript state after success and failure.

use std::sync::Mutex;

use wayfarer_rs::api::{CompletionFuture, CompletionProvider, Message, MessageRole};
use wayfarer_rs::chat::Role;
use wayfarer_rs::error::Error;
use wayfarer_rs::persona::PersonaSpec;
use wayfarer_rs::session::Session;

/// Provider that pops canned replies and records every prompt it sees.
struct ScriptedProvider {
    replies: Mutex<Vec<wayfarer_rs::Result<String>>>,
    prompts: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<wayfarer_rs::Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<Vec<Message>> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionProvider for ScriptedProvider {
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a> {
        Box::pin(async move {
            self.prompts.lock().unwrap().push(messages.to_vec());
            self.replies.lock().unwrap().remove(0)
        })
    }
}

fn guide_persona() -> PersonaSpec {
    PersonaSpec::new("You are a {style} travel guide.").with_param("style", "cheerful")
}

#[tokio::test]
async fn turn_records_user_and_sanitized_assistant_turn() {
    let provider = ScriptedProvider::new(vec![Ok(
        "<think>recalling landmarks</think>Welcome to Paris!".to_string(),
    )]);
    let mut session = Session::with_greeting(&provider, "Hello, traveler!");

    let reply = session.turn(&guide_persona(), "Paris").await.unwrap();
    assert_eq!(reply, "Welcome to Paris!");

    let turns = session.transcript().turns();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[0].role, Role::Assistant);
    assert_eq!(turns[0].content, "Hello, traveler!");
    assert_eq!(turns[1].role, Role::User);
    assert_eq!(turns[1].content, "Paris");
    assert_eq!(turns[2].role, Role::Assistant);
    assert_eq!(turns[2].content, "Welcome to Paris!");
}

#[tokio::test]
async fn provider_sees_system_entry_and_ordered_history() {
    let provider = ScriptedProvider::new(vec![
        Ok("First answer".to_string()),
        Ok("Second answer".to_string()),
    ]);
    let mut session = Session::with_greeting(&provider, "greeting");

    session.turn(&guide_persona(), "first question").await.unwrap();
    session.turn(&guide_persona(), "second question").await.unwrap();

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 2);

    // First call: system entry, seeded greeting, then the user turn.
    let first = &prompts[0];
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].role, MessageRole::System);
    assert_eq!(first[0].content, "You are a cheerful travel guide.");
    assert_eq!(first[1].role, MessageRole::Assistant);
    assert_eq!(first[2].role, MessageRole::User);
    assert_eq!(first[2].content, "first question");

    // Second call replays the whole history in order.
    let second = &prompts[1];
    let contents: Vec<&str> = second.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "You are a cheerful travel guide.",
            "greeting",
            "first question",
            "First answer",
            "second question",
        ]
    );
}

#[tokio::test]
async fn first_turn_without_greeting_assembles_system_and_user_only() {
    let provider = ScriptedProvider::new(vec![Ok("reply".to_string())]);
    let mut session = Session::new(&provider);

    session.turn(&guide_persona(), "hello").await.unwrap();

    let prompts = provider.prompts();
    assert_eq!(prompts[0].len(), 2);
    assert_eq!(prompts[0][0].role, MessageRole::System);
    assert_eq!(prompts[0][1].role, MessageRole::User);
}

#[tokio::test]
async fn backend_failure_keeps_user_turn_and_no_assistant_turn() {
    let provider = ScriptedProvider::new(vec![
        Err(Error::Backend("request failed: connection refused".into())),
        Ok("recovered".to_string()),
    ]);
    let mut session = Session::new(&provider);

    let err = session.turn(&guide_persona(), "doomed question").await.unwrap_err();
    assert!(matches!(err, Error::Backend(_)));

    let turns = session.transcript().turns();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[0].content, "doomed question");

    // The session keeps accepting turns after the failure.
    let reply = session.turn(&guide_persona(), "retry question").await.unwrap();
    assert_eq!(reply, "recovered");
    assert_eq!(session.transcript().len(), 3);
}

#[tokio::test]
async fn unresolved_persona_placeholder_fails_before_provider_is_called() {
    let provider = ScriptedProvider::new(vec![]);
    let mut session = Session::new(&provider);
    let persona = PersonaSpec::new("Visit {destination}.");

    let err = session.turn(&persona, "anywhere").await.unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(provider.prompts().is_empty());
}
