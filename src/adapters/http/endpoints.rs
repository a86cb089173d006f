//! Typed endpoint methods, one per backend capability.
//!
//! Thin wrappers over [`ApiClient`]'s request primitive: inputs pass
//! through unmodified, failures propagate the classified [`ApiError`]
//! unchanged. Input validation that must precede any network call lives
//! in the domain value objects ([`DonationAmount`], [`VolunteerHours`]),
//! not here.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Cause, ChatMessage, ChatTurn, CheckoutSession, DonationAmount, OnboardingProfile,
    PublicConfig, SessionId, SuggestedTribe, Tribe, UserId, VolunteerHours,
};
use crate::ports::{ApiError, OnboardingApi};

use super::client::ApiClient;

/// A pro-bono offer to submit. Skills stay free text; the hour count is
/// validated at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProBonoOffer {
    pub cause_id: i64,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub hours: VolunteerHours,
}

/// Backend acknowledgement of a stored pro-bono offer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProBonoAck {
    pub id: i64,
    pub cause_id: i64,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub hours: u32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
struct DonationRequest {
    cause_id: i64,
    amount: DonationAmount,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    session_id: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
    messages: &'a [ChatMessage],
}

impl ApiClient {
    /// List all public tribes.
    pub async fn fetch_tribes(&self) -> Result<Vec<Tribe>, ApiError> {
        self.get("/public/tribes").await
    }

    /// List all public causes.
    pub async fn fetch_causes(&self) -> Result<Vec<Cause>, ApiError> {
        self.get("/public/causes").await
    }

    /// Fetch a single cause by ID.
    pub async fn fetch_cause(&self, cause_id: i64) -> Result<Cause, ApiError> {
        self.get(&format!("/public/causes/{}", cause_id)).await
    }

    /// Fetch public feature switches (Stripe availability).
    pub async fn fetch_public_config(&self) -> Result<PublicConfig, ApiError> {
        self.get("/public/config").await
    }

    /// Create a donation checkout session and return the redirect
    /// hand-off.
    ///
    /// Fire-once: a duplicate submission creates a duplicate checkout
    /// session server-side, so callers must never auto-retry.
    pub async fn create_donation_checkout_session(
        &self,
        cause_id: i64,
        amount: DonationAmount,
    ) -> Result<CheckoutSession, ApiError> {
        self.post(
            "/donations/create-checkout-session",
            &DonationRequest { cause_id, amount },
        )
        .await
    }

    /// Submit a pro-bono offer. Fire-once, like donations.
    pub async fn create_probono_offer(&self, offer: &ProBonoOffer) -> Result<ProBonoAck, ApiError> {
        self.post("/probono/offers", offer).await
    }

    /// Request ranked tribe suggestions for the accumulated profile.
    pub async fn suggest_tribes(
        &self,
        profile: &OnboardingProfile,
    ) -> Result<Vec<SuggestedTribe>, ApiError> {
        self.post("/onboarding/suggest-tribes", profile).await
    }

    /// Send one AI chat turn carrying the full transcript so far.
    pub async fn ai_chat(
        &self,
        session_id: SessionId,
        user_id: Option<UserId>,
        messages: &[ChatMessage],
    ) -> Result<ChatTurn, ApiError> {
        self.post(
            "/onboarding/ai-chat",
            &ChatRequest {
                session_id,
                user_id,
                messages,
            },
        )
        .await
    }
}

#[async_trait]
impl OnboardingApi for ApiClient {
    async fn suggest_tribes(
        &self,
        profile: &OnboardingProfile,
    ) -> Result<Vec<SuggestedTribe>, ApiError> {
        ApiClient::suggest_tribes(self, profile).await
    }

    async fn send_chat_turn(
        &self,
        session_id: SessionId,
        user_id: Option<UserId>,
        messages: &[ChatMessage],
    ) -> Result<ChatTurn, ApiError> {
        self.ai_chat(session_id, user_id, messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_omits_absent_user_id() {
        let session_id = SessionId::new();
        let messages = vec![ChatMessage::user("hi")];
        let request = ChatRequest {
            session_id,
            user_id: None,
            messages: &messages,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("user_id").is_none());
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[test]
    fn donation_request_serializes_raw_amount() {
        let request = DonationRequest {
            cause_id: 3,
            amount: DonationAmount::new(25.0).unwrap(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"cause_id": 3, "amount": 25.0}));
    }
}
