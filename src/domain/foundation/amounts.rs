//! Validated amount value objects.
//!
//! Donation-session creation and pro-bono submission are fire-once calls
//! with backend side effects, so bad inputs are rejected at construction
//! rather than relying on the server to bounce them.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A donation amount in whole currency units (USD).
///
/// Guaranteed positive and finite; the only way to obtain one is
/// [`DonationAmount::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonationAmount(f64);

impl DonationAmount {
    /// Create a validated amount.
    ///
    /// Rejects zero, negative, NaN, and infinite values.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::NonPositiveAmount(value))
        }
    }

    /// Get inner value
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for DonationAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A committed pro-bono hour count, always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolunteerHours(u32);

impl VolunteerHours {
    /// Create a validated hour count
    pub fn new(hours: u32) -> Result<Self, DomainError> {
        if hours == 0 {
            Err(DomainError::ZeroHours)
        } else {
            Ok(Self(hours))
        }
    }

    /// Get inner value
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for VolunteerHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
