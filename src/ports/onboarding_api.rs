//! Onboarding API port - the seam between the flow and the backend.
//!
//! The onboarding flow only needs two backend capabilities: tribe
//! matching and AI chat turns. Abstracting them behind a trait lets flow
//! tests run against a scripted mock instead of a live server.
//!
//! # Errors
//!
//! [`ApiError`] is the complete failure taxonomy for every backend call
//! in this crate. It is produced exclusively by the HTTP client; no other
//! layer introduces new kinds, and raw transport errors never leak past
//! it.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ChatMessage, ChatTurn, OnboardingProfile, SessionId, SuggestedTribe, UserId};

/// Classified failure of a backend call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The configured deadline elapsed and the in-flight call was
    /// cancelled. Distinct from a server-returned error.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success status. `body` is read
    /// best-effort; an unreadable body becomes an empty string.
    #[error("Server returned {status}: {body}")]
    Http { status: u16, body: String },

    /// Any other transport failure (DNS, connection reset, decode).
    #[error("Network failure: {message}")]
    Network { message: String },
}

impl ApiError {
    /// Status code to surface in UI state, when one applies.
    ///
    /// Timeouts surface as 408 even though no response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Timeout => Some(408),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network { .. } => None,
        }
    }

    /// Convenience constructor for transport failures.
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }
}

/// Backend capabilities the onboarding flow depends on.
///
/// Implementations must be single-attempt: retry policy, if any, belongs
/// to callers, and none of the current callers retry.
#[async_trait]
pub trait OnboardingApi: Send + Sync {
    /// Request ranked tribe suggestions for the accumulated profile.
    ///
    /// The returned list may be empty; callers decide what to substitute.
    async fn suggest_tribes(
        &self,
        profile: &OnboardingProfile,
    ) -> Result<Vec<SuggestedTribe>, ApiError>;

    /// Send one chat turn carrying the full transcript as of submission
    /// time.
    async fn send_chat_turn(
        &self,
        session_id: SessionId,
        user_id: Option<UserId>,
        messages: &[ChatMessage],
    ) -> Result<ChatTurn, ApiError>;
}
