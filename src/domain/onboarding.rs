//! Onboarding step definitions, flow states, and the built-in fallback
//! suggestion list.
//!
//! The structured variant walks three fixed steps, one per profile
//! category. The fallback list substitutes for a failed or empty
//! suggestion response so the results screen never renders empty.

use once_cell::sync::Lazy;

use super::catalog::SuggestedTribe;
use super::profile::ProfileCategory;

/// One structured-mode question and its selectable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingStep {
    pub question: &'static str,
    pub category: ProfileCategory,
    pub options: &'static [&'static str],
}

/// The structured onboarding sequence. Order is load-bearing: step index
/// binds directly to the accumulator category.
pub const ONBOARDING_STEPS: [OnboardingStep; 3] = [
    OnboardingStep {
        question: "What causes are you passionate about?",
        category: ProfileCategory::Interests,
        options: &[
            "Environment",
            "Education",
            "Health",
            "Social Justice",
            "Technology",
            "Arts & Culture",
        ],
    },
    OnboardingStep {
        question: "What skills can you contribute?",
        category: ProfileCategory::Skills,
        options: &[
            "Leadership",
            "Design",
            "Programming",
            "Marketing",
            "Writing",
            "Event Planning",
        ],
    },
    OnboardingStep {
        question: "Where are you located?",
        category: ProfileCategory::Location,
        options: &[
            "New York",
            "San Francisco",
            "London",
            "Berlin",
            "Tokyo",
            "Remote",
        ],
    },
];

/// How many results the fallback substitutes when the live request fails
/// or comes back empty.
pub const FALLBACK_RESULT_COUNT: usize = 2;

static FALLBACK_TRIBES: Lazy<Vec<SuggestedTribe>> = Lazy::new(|| {
    vec![
        SuggestedTribe {
            id: None,
            name: "Green Tech Innovators".to_string(),
            description: "Building sustainable technology solutions for environmental challenges"
                .to_string(),
            location: Some("San Francisco".to_string()),
            score: None,
        },
        SuggestedTribe {
            id: None,
            name: "Digital Education Alliance".to_string(),
            description: "Creating accessible learning opportunities through technology"
                .to_string(),
            location: Some("Global".to_string()),
            score: None,
        },
    ]
});

/// The fixed example results shown when matching is unavailable.
pub fn fallback_tribes() -> Vec<SuggestedTribe> {
    FALLBACK_TRIBES
        .iter()
        .take(FALLBACK_RESULT_COUNT)
        .cloned()
        .collect()
}

/// Where an onboarding attempt currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingState {
    /// Structured mode, on the given step index.
    Selecting { step: usize },
    /// Conversational mode, gathering signal turn by turn.
    Chatting,
    /// A suggestion request is in flight.
    Suggesting,
    /// Terminal: matched tribes (live or fallback) ready to render.
    Results { tribes: Vec<SuggestedTribe> },
}

impl OnboardingState {
    /// Short name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            OnboardingState::Selecting { .. } => "selecting",
            OnboardingState::Chatting => "chatting",
            OnboardingState::Suggesting => "suggesting",
            OnboardingState::Results { .. } => "results",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OnboardingState::Results { .. })
    }
}
