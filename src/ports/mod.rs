//! Ports - async traits at the seams, plus the client error taxonomy.

mod onboarding_api;

pub use onboarding_api::{ApiError, OnboardingApi};
