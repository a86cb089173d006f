//! OnboardingProfile accumulator.
//!
//! The evolving interest/skill/location signal gathered during onboarding.
//! Two families of mutation exist on purpose:
//!
//! - `toggle` / `select` / `deselect` are user-driven. Toggle backs the
//!   direct-click affordance and is symmetric: a second identical click
//!   removes the value.
//! - `reinforce` is delta-driven and purely additive. AI-extracted deltas
//!   merge through it so a repeated mention can never silently remove a
//!   previously confirmed selection. Applying a delta through `toggle`
//!   instead would do exactly that; the hazard is pinned by a test below.

use serde::Serialize;
use std::collections::BTreeSet;

use super::chat::ProfileDelta;

/// The three accumulator categories, bound one-to-one to the structured
/// onboarding steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileCategory {
    Interests,
    Skills,
    Location,
}

/// Accumulated user profile signal.
///
/// Location is a set even though it is semantically singular; the
/// structured step mutates it with the same toggle affordance as the
/// others. Sorted sets keep the serialized arrays deterministic, matching
/// the backend's own sorted handling.
///
/// Serializes directly as the `/onboarding/suggest-tribes` request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OnboardingProfile {
    pub interests: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub location: BTreeSet<String>,
}

impl OnboardingProfile {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_mut(&mut self, category: ProfileCategory) -> &mut BTreeSet<String> {
        match category {
            ProfileCategory::Interests => &mut self.interests,
            ProfileCategory::Skills => &mut self.skills,
            ProfileCategory::Location => &mut self.location,
        }
    }

    /// The selected values for a category.
    pub fn selected(&self, category: ProfileCategory) -> &BTreeSet<String> {
        match category {
            ProfileCategory::Interests => &self.interests,
            ProfileCategory::Skills => &self.skills,
            ProfileCategory::Location => &self.location,
        }
    }

    /// Flip membership: remove the value if present, add it otherwise.
    ///
    /// Involution: toggling the same value twice restores the set.
    pub fn toggle(&mut self, category: ProfileCategory, value: impl Into<String>) {
        let value = value.into();
        let set = self.set_mut(category);
        if !set.remove(&value) {
            set.insert(value);
        }
    }

    /// Add a value; idempotent under repetition.
    pub fn select(&mut self, category: ProfileCategory, value: impl Into<String>) {
        self.set_mut(category).insert(value.into());
    }

    /// Remove a value; idempotent under repetition.
    pub fn deselect(&mut self, category: ProfileCategory, value: &str) {
        self.set_mut(category).remove(value);
    }

    /// Additive merge entry point for AI-derived signal. Never removes.
    pub fn reinforce(&mut self, category: ProfileCategory, value: impl Into<String>) {
        self.set_mut(category).insert(value.into());
    }

    /// Merge a chat-turn delta. Each present field is reinforced entry by
    /// entry; absent fields leave the accumulator untouched.
    pub fn merge_delta(&mut self, delta: &ProfileDelta) {
        if let Some(interests) = &delta.interests {
            for interest in interests {
                self.reinforce(ProfileCategory::Interests, interest.clone());
            }
        }
        if let Some(skills) = &delta.skills {
            for skill in skills {
                self.reinforce(ProfileCategory::Skills, skill.clone());
            }
        }
        if let Some(city) = &delta.location_city {
            self.reinforce(ProfileCategory::Location, city.clone());
        }
        if let Some(country) = &delta.location_country {
            self.reinforce(ProfileCategory::Location, country.clone());
        }
    }

    /// Structured-mode progress percentage: `(current + 1) / total * 100`.
    pub fn progress(total_steps: usize, current_step: usize) -> f64 {
        if total_steps == 0 {
            return 0.0;
        }
        (current_step + 1) as f64 / total_steps as f64 * 100.0
    }

    /// True when no category holds any signal.
    pub fn is_empty(&self) -> bool {
        self.interests.is_empty() && self.skills.is_empty() && self.location.is_empty()
    }
}
