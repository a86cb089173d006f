//! Application layer - orchestration over the domain and ports.

mod flow;

pub use flow::{FlowError, OnboardingFlow, CHAT_FALLBACK_REPLY};
