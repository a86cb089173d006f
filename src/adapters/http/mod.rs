//! HTTP adapter - reqwest-backed implementation of the backend contract.

mod client;
mod endpoints;

pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use endpoints::{ProBonoAck, ProBonoOffer};
