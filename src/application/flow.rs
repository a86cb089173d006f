//! Onboarding flow orchestrator.
//!
//! Owns the profile accumulator and the chat session for exactly one
//! onboarding attempt and drives the [`OnboardingApi`] port. The two UX
//! variants (structured steps, free-form chat) are mutually exclusive
//! deployments chosen at construction, never concurrent modes within one
//! session.
//!
//! # Single-flight discipline
//!
//! All requests are single in-flight: the interval between issuing a
//! request and receiving its outcome is a pending state during which
//! re-invocation fails with [`FlowError::RequestInFlight`]. The guard is
//! cooperative (there is no parallelism to lock against); it exists so a
//! UI wired to this flow cannot double-submit a turn or a suggestion
//! request.
//!
//! # Failure policy
//!
//! Matching and conversation failures must never block onboarding:
//! suggestion errors and empty responses land in `Results` with the
//! built-in fallback list, chat errors append a canned assistant reply
//! and leave the profile untouched. No raw error text reaches the user
//! from here.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{
    fallback_tribes, ChatMessage, OnboardingProfile, OnboardingSession, OnboardingState,
    OnboardingStep, SuggestedTribe, UserId, ONBOARDING_STEPS,
};
use crate::ports::OnboardingApi;

/// Canned assistant reply appended when a chat turn fails.
pub const CHAT_FALLBACK_REPLY: &str = "Thanks! Tell me more.";

/// Errors surfaced to the caller of a flow transition.
///
/// These are control-flow outcomes (a disabled button pressed anyway),
/// not backend failures; backend failures are absorbed by the fallback
/// policy and never escape the flow.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlowError {
    #[error("A request is already in flight for this session")]
    RequestInFlight,

    #[error("The current step requires at least one selection")]
    EmptySelection,

    #[error("Cannot {action} in the {state} state")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },
}

/// State machine for one onboarding attempt.
pub struct OnboardingFlow {
    api: Arc<dyn OnboardingApi>,
    profile: OnboardingProfile,
    session: OnboardingSession,
    state: OnboardingState,
    busy: bool,
}

impl OnboardingFlow {
    /// Start a structured (step-based) attempt at step 0.
    pub fn structured(api: Arc<dyn OnboardingApi>) -> Self {
        Self {
            api,
            profile: OnboardingProfile::new(),
            session: OnboardingSession::new(None),
            state: OnboardingState::Selecting { step: 0 },
            busy: false,
        }
    }

    /// Start a conversational attempt; the transcript opens with the
    /// assistant greeting.
    pub fn conversational(api: Arc<dyn OnboardingApi>, user_id: Option<UserId>) -> Self {
        Self {
            api,
            profile: OnboardingProfile::new(),
            session: OnboardingSession::new(user_id),
            state: OnboardingState::Chatting,
            busy: false,
        }
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    pub fn profile(&self) -> &OnboardingProfile {
        &self.profile
    }

    /// The conversation transcript, oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        self.session.messages()
    }

    pub fn session(&self) -> &OnboardingSession {
        &self.session
    }

    /// The active structured step, if the flow is in `Selecting`.
    pub fn current_step(&self) -> Option<&'static OnboardingStep> {
        match self.state {
            OnboardingState::Selecting { step } => ONBOARDING_STEPS.get(step),
            _ => None,
        }
    }

    /// Structured-mode progress percentage for the active step.
    pub fn progress(&self) -> f64 {
        match self.state {
            OnboardingState::Selecting { step } => {
                OnboardingProfile::progress(ONBOARDING_STEPS.len(), step)
            }
            _ => 100.0,
        }
    }

    /// Whether `next` is currently enabled: the active step has at least
    /// one selection and nothing is in flight.
    pub fn can_advance(&self) -> bool {
        match self.current_step() {
            Some(step) => !self.busy && !self.profile.selected(step.category).is_empty(),
            None => false,
        }
    }

    /// Toggle an option on the active step. Stays in `Selecting`.
    pub fn select_option(&mut self, value: impl Into<String>) -> Result<(), FlowError> {
        let step = self.current_step().ok_or(FlowError::InvalidState {
            action: "select an option",
            state: self.state.name(),
        })?;
        self.profile.toggle(step.category, value);
        Ok(())
    }

    /// Return to the previous step. No-op at step 0.
    pub fn back(&mut self) -> Result<(), FlowError> {
        match self.state {
            OnboardingState::Selecting { step } => {
                if step > 0 {
                    self.state = OnboardingState::Selecting { step: step - 1 };
                }
                Ok(())
            }
            _ => Err(FlowError::InvalidState {
                action: "go back",
                state: self.state.name(),
            }),
        }
    }

    /// Advance past the active step, or request suggestions from the
    /// last one.
    ///
    /// Requires a non-empty selection on the active step.
    pub async fn next(&mut self) -> Result<(), FlowError> {
        if self.busy {
            return Err(FlowError::RequestInFlight);
        }
        let step = match self.state {
            OnboardingState::Selecting { step } => step,
            _ => {
                return Err(FlowError::InvalidState {
                    action: "advance",
                    state: self.state.name(),
                })
            }
        };
        let bound = ONBOARDING_STEPS[step];
        if self.profile.selected(bound.category).is_empty() {
            return Err(FlowError::EmptySelection);
        }

        if step + 1 < ONBOARDING_STEPS.len() {
            self.state = OnboardingState::Selecting { step: step + 1 };
            debug!(step = step + 1, "advanced to next onboarding step");
            Ok(())
        } else {
            self.suggest().await;
            Ok(())
        }
    }

    /// Send one conversational turn. Stays in `Chatting`.
    ///
    /// On success the assistant reply is appended and its profile delta
    /// merged; on failure a canned reply is appended and the profile is
    /// left untouched.
    pub async fn send_turn(&mut self, text: impl Into<String>) -> Result<(), FlowError> {
        if self.busy {
            return Err(FlowError::RequestInFlight);
        }
        if self.state != OnboardingState::Chatting {
            return Err(FlowError::InvalidState {
                action: "send a chat turn",
                state: self.state.name(),
            });
        }

        self.session.push_user(text);
        self.busy = true;
        let outcome = self
            .api
            .send_chat_turn(
                self.session.id(),
                self.session.user_id(),
                self.session.messages(),
            )
            .await;
        self.busy = false;

        match outcome {
            Ok(turn) => {
                self.session.push_assistant(turn.reply);
                self.profile.merge_delta(&turn.profile_delta);
            }
            Err(err) => {
                warn!(error = %err, "chat turn failed, using canned reply");
                self.session.push_assistant(CHAT_FALLBACK_REPLY);
            }
        }
        Ok(())
    }

    /// Finish the conversation and request suggestions for whatever
    /// signal was gathered.
    pub async fn finish(&mut self) -> Result<(), FlowError> {
        if self.busy {
            return Err(FlowError::RequestInFlight);
        }
        if self.state != OnboardingState::Chatting {
            return Err(FlowError::InvalidState {
                action: "finish the conversation",
                state: self.state.name(),
            });
        }
        self.suggest().await;
        Ok(())
    }

    /// Issue the suggestion request and land in `Results`, substituting
    /// the fallback list for a failure or an empty response.
    async fn suggest(&mut self) {
        self.state = OnboardingState::Suggesting;
        self.busy = true;
        let outcome = self.api.suggest_tribes(&self.profile).await;
        self.busy = false;

        let tribes: Vec<SuggestedTribe> = match outcome {
            Ok(tribes) if !tribes.is_empty() => {
                info!(count = tribes.len(), "matched tribes");
                tribes
            }
            Ok(_) => {
                warn!("suggestion response was empty, showing fallback list");
                fallback_tribes()
            }
            Err(err) => {
                warn!(error = %err, "suggestion request failed, showing fallback list");
                fallback_tribes()
            }
        };
        self.state = OnboardingState::Results { tribes };
    }
}
