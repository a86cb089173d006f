//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, validated value objects, and error types
//! that form the vocabulary of the Impact Forge client domain.

mod amounts;
mod errors;
mod ids;

pub use amounts::{DonationAmount, VolunteerHours};
pub use errors::DomainError;
pub use ids::{SessionId, UserId};
