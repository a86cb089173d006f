//! Conversational onboarding primitives.
//!
//! A session owns an append-only transcript scoped to one client-generated
//! [`SessionId`]. Messages are immutable once appended; every chat turn
//! sends the full transcript as of submission time, and replies are
//! appended strictly in turn order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::foundation::{SessionId, UserId};

/// Greeting seeded into every conversational session.
pub const ASSISTANT_GREETING: &str =
    "Hi! I'm here to help you find your tribe. What causes do you care about?";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// One immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
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

/// Partial profile update extracted from one conversational turn.
///
/// Absent fields mean "no signal this turn", never "clear the existing
/// profile".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDelta {
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,
}

impl ProfileDelta {
    /// True when no field carries any signal.
    pub fn is_empty(&self) -> bool {
        self.interests.as_ref().map_or(true, |v| v.is_empty())
            && self.skills.as_ref().map_or(true, |v| v.is_empty())
            && self.location_city.is_none()
            && self.location_country.is_none()
    }
}

/// Assistant reply plus the delta interpreted from the user's turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub reply: String,
    #[serde(default)]
    pub profile_delta: ProfileDelta,
}

/// One onboarding conversation: session token, optional signed-in user,
/// and the ordered transcript.
///
/// Created when the onboarding flow starts, discarded when it completes or
/// is abandoned. There is no persistence across sessions.
#[derive(Debug, Clone)]
pub struct OnboardingSession {
    id: SessionId,
    user_id: Option<UserId>,
    created_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
}

impl OnboardingSession {
    /// Start a fresh session seeded with the assistant greeting.
    pub fn new(user_id: Option<UserId>) -> Self {
        Self {
            id: SessionId::new(),
            user_id,
            created_at: Utc::now(),
            messages: vec![ChatMessage::assistant(ASSISTANT_GREETING)],
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The transcript so far, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message, returning its transcript position.
    pub fn push_user(&mut self, content: impl Into<String>) -> usize {
        self.messages.push(ChatMessage::user(content));
        self.messages.len() - 1
    }

    /// Append an assistant message, returning its transcript position.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> usize {
        self.messages.push(ChatMessage::assistant(content));
        self.messages.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_seeded_with_greeting() {
        let session = OnboardingSession::new(None);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, MessageRole::Assistant);
        assert_eq!(session.messages()[0].content, ASSISTANT_GREETING);
    }

    #[test]
    fn transcript_preserves_append_order() {
        let mut session = OnboardingSession::new(Some(UserId::new(7)));
        session.push_user("I love coding");
        session.push_assistant("Great! Where do you live?");
        session.push_user("Seattle");

        let roles: Vec<MessageRole> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
            ]
        );
    }

    #[test]
    fn delta_with_empty_lists_counts_as_empty() {
        let delta = ProfileDelta {
            interests: Some(vec![]),
            skills: Some(vec![]),
            ..Default::default()
        };
        assert!(delta.is_empty());
    }

    #[test]
    fn chat_turn_tolerates_missing_delta() {
        let turn: ChatTurn = serde_json::from_str(r#"{"reply":"Thanks!"}"#).unwrap();
        assert_eq!(turn.reply, "Thanks!");
        assert!(turn.profile_delta.is_empty());
    }

    #[test]
    fn message_roles_serialize_lowercase() {
        let msg = ChatMessage::user("hi");
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"role":"user","content":"hi"}"#
        );
    }
}
