//! Public catalog entities served by the backend.
//!
//! Field names mirror the wire format exactly; optional fields default so
//! that older or sparse backend payloads still deserialize.

use serde::{Deserialize, Serialize};

/// A community users can join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tribe {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// A fundraising campaign with a goal and a running total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    pub id: i64,
    pub name: String,
    pub mission: String,
    #[serde(default)]
    pub funding_goal: f64,
    #[serde(default)]
    pub funds_raised: f64,
    #[serde(default)]
    pub supporters_count: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Cause {
    /// Fraction of the funding goal reached, clamped to [0, 1].
    ///
    /// A zero goal reads as fully funded so progress bars never divide by
    /// zero.
    pub fn funding_progress(&self) -> f64 {
        if self.funding_goal <= 0.0 {
            1.0
        } else {
            (self.funds_raised / self.funding_goal).clamp(0.0, 1.0)
        }
    }
}

/// Feature switches exposed by `/public/config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub stripe_enabled: bool,
}

/// Checkout hand-off returned by donation-session creation.
///
/// The `url` is an opaque redirect target; the client never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// A ranked tribe recommendation from the matching backend.
///
/// The backend may omit `id` and `score` (and often `location`); every
/// consumer must tolerate their absence. The built-in fallback entries
/// carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTribe {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}
