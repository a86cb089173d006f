//! Domain layer - pure types and state, no I/O.

pub mod catalog;
pub mod chat;
pub mod foundation;
pub mod onboarding;
pub mod profile;

pub use catalog::{Cause, CheckoutSession, PublicConfig, SuggestedTribe, Tribe};
pub use chat::{
    ChatMessage, ChatTurn, MessageRole, OnboardingSession, ProfileDelta, ASSISTANT_GREETING,
};
pub use foundation::{DomainError, DonationAmount, SessionId, UserId, VolunteerHours};
pub use onboarding::{
    fallback_tribes, OnboardingState, OnboardingStep, FALLBACK_RESULT_COUNT, ONBOARDING_STEPS,
};
pub use profile::{OnboardingProfile, ProfileCategory};
