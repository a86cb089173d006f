//! Adapters - concrete implementations of the ports.

pub mod http;
pub mod mock;

pub use http::{ApiClient, ProBonoAck, ProBonoOffer, DEFAULT_TIMEOUT};
pub use mock::MockOnboardingApi;
