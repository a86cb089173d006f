//! End-to-end onboarding flow scenarios over the scripted mock backend.

use std::sync::Arc;

use impact_forge_client::adapters::MockOnboardingApi;
use impact_forge_client::application::{FlowError, OnboardingFlow, CHAT_FALLBACK_REPLY};
use impact_forge_client::domain::{
    ChatTurn, MessageRole, OnboardingState, ProfileDelta, SuggestedTribe, ASSISTANT_GREETING,
};
use impact_forge_client::ports::ApiError;

fn suggestion(name: &str, score: f64) -> SuggestedTribe {
    SuggestedTribe {
        id: Some(1),
        name: name.to_string(),
        description: format!("{name} description"),
        location: None,
        score: Some(score),
    }
}

fn results(flow: &OnboardingFlow) -> &[SuggestedTribe] {
    match flow.state() {
        OnboardingState::Results { tribes } => tribes,
        other => panic!("expected results state, got {:?}", other.name()),
    }
}

// Scenario A: full structured walk, backend returns an empty list, the
// results screen shows the two-item fallback.
#[tokio::test]
async fn structured_walk_with_empty_response_falls_back() {
    let api = MockOnboardingApi::new().with_suggestions(Ok(vec![]));
    let mut flow = OnboardingFlow::structured(Arc::new(api.clone()));

    for selection in ["Environment", "Design", "Remote"] {
        flow.select_option(selection).unwrap();
        flow.next().await.unwrap();
    }

    let tribes = results(&flow);
    assert_eq!(tribes.len(), 2);
    assert_eq!(tribes[0].name, "Green Tech Innovators");
    assert_eq!(tribes[1].name, "Digital Education Alliance");

    // The request carried the full accumulated profile.
    let calls = api.suggestion_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].profile.interests.contains("Environment"));
    assert!(calls[0].profile.skills.contains("Design"));
    assert!(calls[0].profile.location.contains("Remote"));
}

#[tokio::test]
async fn structured_walk_surfaces_live_suggestions() {
    let api = MockOnboardingApi::new().with_suggestions(Ok(vec![
        suggestion("Green Coders", 4.5),
        suggestion("City Gardeners", 2.0),
        suggestion("Night Owls", 0.5),
    ]));
    let mut flow = OnboardingFlow::structured(Arc::new(api));

    for selection in ["Technology", "Programming", "Berlin"] {
        flow.select_option(selection).unwrap();
        flow.next().await.unwrap();
    }

    let tribes = results(&flow);
    assert_eq!(tribes.len(), 3);
    assert_eq!(tribes[0].name, "Green Coders");
    assert!(flow.state().is_terminal());
}

#[tokio::test]
async fn suggestion_failure_falls_back_instead_of_surfacing_error() {
    let api = MockOnboardingApi::new().with_suggestions(Err(ApiError::Timeout));
    let mut flow = OnboardingFlow::structured(Arc::new(api));

    for selection in ["Health", "Writing", "London"] {
        flow.select_option(selection).unwrap();
        flow.next().await.unwrap();
    }

    assert_eq!(results(&flow).len(), 2);
}

#[tokio::test]
async fn next_requires_a_selection() {
    let api = MockOnboardingApi::new();
    let mut flow = OnboardingFlow::structured(Arc::new(api.clone()));

    assert!(!flow.can_advance());
    assert_eq!(flow.next().await, Err(FlowError::EmptySelection));
    assert_eq!(flow.state(), &OnboardingState::Selecting { step: 0 });

    // Toggling a value on and off again re-disables advancing.
    flow.select_option("Environment").unwrap();
    assert!(flow.can_advance());
    flow.select_option("Environment").unwrap();
    assert_eq!(flow.next().await, Err(FlowError::EmptySelection));

    assert!(api.suggestion_calls().is_empty());
}

#[tokio::test]
async fn back_is_a_no_op_at_step_zero() {
    let api = MockOnboardingApi::new();
    let mut flow = OnboardingFlow::structured(Arc::new(api));

    flow.back().unwrap();
    assert_eq!(flow.state(), &OnboardingState::Selecting { step: 0 });

    flow.select_option("Education").unwrap();
    flow.next().await.unwrap();
    assert_eq!(flow.state(), &OnboardingState::Selecting { step: 1 });

    flow.back().unwrap();
    assert_eq!(flow.state(), &OnboardingState::Selecting { step: 0 });
}

#[tokio::test]
async fn progress_tracks_the_active_step() {
    let api = MockOnboardingApi::new();
    let mut flow = OnboardingFlow::structured(Arc::new(api));

    assert!((flow.progress() - 100.0 / 3.0).abs() < 1e-9);
    flow.select_option("Education").unwrap();
    flow.next().await.unwrap();
    assert!((flow.progress() - 200.0 / 3.0).abs() < 1e-9);
}

// Scenario B: one chat turn merges the extracted delta into the profile.
#[tokio::test]
async fn chat_turn_merges_profile_delta() {
    let api = MockOnboardingApi::new().with_chat_turn(Ok(ChatTurn {
        reply: "Seattle is a great tech hub! What else?".to_string(),
        profile_delta: ProfileDelta {
            skills: Some(vec!["Programming".to_string()]),
            location_city: Some("Seattle".to_string()),
            ..Default::default()
        },
    }));
    let mut flow = OnboardingFlow::conversational(Arc::new(api.clone()), None);

    flow.send_turn("I love coding and live in Seattle")
        .await
        .unwrap();

    assert!(flow.profile().skills.contains("Programming"));
    assert!(flow.profile().location.contains("Seattle"));
    assert_eq!(flow.state(), &OnboardingState::Chatting);

    // Transcript order: greeting, user turn, assistant reply.
    let transcript = flow.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].content, ASSISTANT_GREETING);
    assert_eq!(transcript[1].role, MessageRole::User);
    assert_eq!(transcript[2].role, MessageRole::Assistant);

    // The request carried the transcript as of submission time.
    let calls = api.chat_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].session_id, flow.session().id());
    assert_eq!(calls[0].messages.len(), 2);
    assert_eq!(calls[0].messages[1].content, "I love coding and live in Seattle");
}

#[tokio::test]
async fn failed_chat_turn_appends_canned_reply_and_keeps_profile() {
    let api = MockOnboardingApi::new().with_chat_turn(Err(ApiError::network("connection reset")));
    let mut flow = OnboardingFlow::conversational(Arc::new(api), None);

    flow.send_turn("I care about education").await.unwrap();

    let transcript = flow.transcript();
    assert_eq!(transcript.last().unwrap().content, CHAT_FALLBACK_REPLY);
    assert!(flow.profile().is_empty());
    assert_eq!(flow.state(), &OnboardingState::Chatting);
}

#[tokio::test]
async fn consecutive_turns_keep_transcript_order() {
    let api = MockOnboardingApi::new()
        .with_chat_turn(Ok(ChatTurn {
            reply: "first reply".to_string(),
            profile_delta: ProfileDelta::default(),
        }))
        .with_chat_turn(Ok(ChatTurn {
            reply: "second reply".to_string(),
            profile_delta: ProfileDelta::default(),
        }));
    let mut flow = OnboardingFlow::conversational(Arc::new(api.clone()), None);

    flow.send_turn("turn one").await.unwrap();
    flow.send_turn("turn two").await.unwrap();

    let contents: Vec<&str> = flow.transcript().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            ASSISTANT_GREETING,
            "turn one",
            "first reply",
            "turn two",
            "second reply",
        ]
    );

    // The second request saw the first exchange in full.
    let calls = api.chat_calls();
    assert_eq!(calls[1].messages.len(), 4);
}

#[tokio::test]
async fn finishing_a_conversation_requests_suggestions_with_fallback() {
    let api = MockOnboardingApi::new()
        .with_chat_turn(Ok(ChatTurn {
            reply: "Noted!".to_string(),
            profile_delta: ProfileDelta {
                interests: Some(vec!["Environment".to_string()]),
                ..Default::default()
            },
        }))
        .with_suggestions(Err(ApiError::Http {
            status: 503,
            body: "unavailable".to_string(),
        }));
    let mut flow = OnboardingFlow::conversational(Arc::new(api.clone()), None);

    flow.send_turn("green stuff").await.unwrap();
    flow.finish().await.unwrap();

    assert_eq!(results(&flow).len(), 2);
    assert!(api.suggestion_calls()[0].profile.interests.contains("Environment"));
}

#[tokio::test]
async fn structured_operations_are_rejected_in_chat_mode_and_vice_versa() {
    let api = Arc::new(MockOnboardingApi::new());

    let mut chat = OnboardingFlow::conversational(api.clone(), None);
    assert!(matches!(
        chat.select_option("Environment"),
        Err(FlowError::InvalidState { .. })
    ));
    assert!(matches!(chat.back(), Err(FlowError::InvalidState { .. })));

    let mut structured = OnboardingFlow::structured(api);
    assert!(matches!(
        structured.send_turn("hello").await,
        Err(FlowError::InvalidState { .. })
    ));
    assert!(matches!(
        structured.finish().await,
        Err(FlowError::InvalidState { .. })
    ));
}

#[tokio::test]
async fn results_state_is_terminal() {
    let api = MockOnboardingApi::new().with_suggestions(Ok(vec![suggestion("Makers", 3.0)]));
    let mut flow = OnboardingFlow::structured(Arc::new(api.clone()));

    for selection in ["Technology", "Design", "Tokyo"] {
        flow.select_option(selection).unwrap();
        flow.next().await.unwrap();
    }

    assert!(matches!(
        flow.next().await,
        Err(FlowError::InvalidState { .. })
    ));
    assert!(matches!(
        flow.select_option("Health"),
        Err(FlowError::InvalidState { .. })
    ));
    // Exactly one backend call happened for the whole attempt.
    assert_eq!(api.suggestion_calls().len(), 1);
}
