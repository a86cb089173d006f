//! Mock onboarding backend for testing.
//!
//! Scripted implementation of the [`OnboardingApi`] port: responses are
//! consumed in order, failures can be injected, and every call is
//! recorded for verification. An optional delay simulates a slow backend.
//!
//! # Example
//!
//! ```ignore
//! let api = MockOnboardingApi::new()
//!     .with_chat_turn(Ok(ChatTurn { reply: "Noted!".into(), profile_delta: delta }))
//!     .with_suggestions(Err(ApiError::Timeout));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::{ChatMessage, ChatTurn, OnboardingProfile, SessionId, SuggestedTribe, UserId};
use crate::ports::{ApiError, OnboardingApi};

/// A recorded suggestion call: the profile snapshot at submission time.
#[derive(Debug, Clone)]
pub struct RecordedSuggestion {
    pub profile: OnboardingProfile,
}

/// A recorded chat call: the transcript snapshot at submission time.
#[derive(Debug, Clone)]
pub struct RecordedChatTurn {
    pub session_id: SessionId,
    pub user_id: Option<UserId>,
    pub messages: Vec<ChatMessage>,
}

/// Scripted mock backend.
///
/// When a response queue runs dry the mock answers with an empty
/// suggestion list / a canned reply, so under-scripted tests fail on
/// assertions rather than panics.
#[derive(Debug, Clone, Default)]
pub struct MockOnboardingApi {
    suggestions: Arc<Mutex<VecDeque<Result<Vec<SuggestedTribe>, ApiError>>>>,
    chat_turns: Arc<Mutex<VecDeque<Result<ChatTurn, ApiError>>>>,
    suggestion_calls: Arc<Mutex<Vec<RecordedSuggestion>>>,
    chat_calls: Arc<Mutex<Vec<RecordedChatTurn>>>,
    delay: Duration,
}

impl MockOnboardingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a suggestion response.
    pub fn with_suggestions(self, response: Result<Vec<SuggestedTribe>, ApiError>) -> Self {
        self.suggestions.lock().unwrap().push_back(response);
        self
    }

    /// Queue a chat-turn response.
    pub fn with_chat_turn(self, response: Result<ChatTurn, ApiError>) -> Self {
        self.chat_turns.lock().unwrap().push_back(response);
        self
    }

    /// Simulate backend latency on every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Suggestion calls observed so far.
    pub fn suggestion_calls(&self) -> Vec<RecordedSuggestion> {
        self.suggestion_calls.lock().unwrap().clone()
    }

    /// Chat calls observed so far.
    pub fn chat_calls(&self) -> Vec<RecordedChatTurn> {
        self.chat_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OnboardingApi for MockOnboardingApi {
    async fn suggest_tribes(
        &self,
        profile: &OnboardingProfile,
    ) -> Result<Vec<SuggestedTribe>, ApiError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.suggestion_calls.lock().unwrap().push(RecordedSuggestion {
            profile: profile.clone(),
        });
        self.suggestions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn send_chat_turn(
        &self,
        session_id: SessionId,
        user_id: Option<UserId>,
        messages: &[ChatMessage],
    ) -> Result<ChatTurn, ApiError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.chat_calls.lock().unwrap().push(RecordedChatTurn {
            session_id,
            user_id,
            messages: messages.to_vec(),
        });
        self.chat_turns.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(ChatTurn {
                reply: "Thanks!".to_string(),
                profile_delta: Default::default(),
            })
        })
    }
}
