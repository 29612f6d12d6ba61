//! Prompt assembly: persona plus transcript into a role-tagged sequence.

use crate::api::Message;
use crate::chat::{Role, Transcript};
use crate::error::Result;
use crate::persona::PersonaSpec;

/// Build the message sequence for one completion call.
///
/// The rendered persona becomes the leading system entry, followed by one
/// entry per transcript turn in insertion order, roles preserved and
/// content copied verbatim. Pure function of its inputs: the session
/// rebuilds the full prompt from the whole transcript on every turn, so
/// identical inputs must produce an identical sequence.
///
/// An empty transcript yields the system entry alone.
pub fn assemble(persona: &PersonaSpec, transcript: &Transcript) -> Result<Vec<Message>> {
    let mut messages = Vec::with_capacity(transcript.len() + 1);
    messages.push(Message::system(persona.render()?));
    for turn in transcript.turns() {
        messages.push(match turn.role {
            Role::User => Message::user(&turn.content),
            Role::Assistant => Message::assistant(&turn.content),
        });
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MessageRole;
    use crate::error::Error;

    fn persona() -> PersonaSpec {
        PersonaSpec::new("You are a {role}.").with_param("role", "guide")
    }

    #[test]
    fn empty_transcript_yields_system_entry_only() {
        let messages = assemble(&persona(), &Transcript::new()).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[0].content, "You are a guide.");
    }

    #[test]
    fn turn_order_and_roles_are_preserved() {
        let mut transcript = Transcript::new();
        transcript.push_user("u1");
        transcript.push_assistant("a1");
        transcript.push_user("u2");

        let messages = assemble(&persona(), &transcript).unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "u1");
        assert_eq!(messages[2].role, MessageRole::Assistant);
        assert_eq!(messages[2].content, "a1");
        assert_eq!(messages[3].role, MessageRole::User);
        assert_eq!(messages[3].content, "u2");
    }

    #[test]
    fn assembly_is_deterministic() {
        let mut transcript = Transcript::seeded("welcome");
        transcript.push_user("hello");

        let first = assemble(&persona(), &transcript).unwrap();
        let second = assemble(&persona(), &transcript).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unresolved_placeholder_propagates() {
        let persona = PersonaSpec::new("Visit {destination}.");
        let err = assemble(&persona, &Transcript::new()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
