use std::sync::Once;

use jobsearch_core::{
    update, AppState, Effect, ExperienceLevel, FailureKind, JobListing, Msg, NotificationKind,
    RequestState, ResultRegion, SearchFailure, SearchQuery, FALLBACK_ERROR_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobsearch_logging::initialize_for_tests);
}

fn fill_form(state: AppState, title: &str, experience: &str) -> AppState {
    let (state, _) = update(state, Msg::TitleChanged(title.to_string()));
    let (state, _) = update(state, Msg::ExperienceSelected(experience.to_string()));
    state
}

fn submit(state: AppState, title: &str, experience: &str) -> (AppState, Vec<Effect>) {
    update(fill_form(state, title, experience), Msg::SubmitClicked)
}

fn started_token(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartSearch { token, .. } => Some(*token),
            _ => None,
        })
        .expect("start search effect")
}

fn acme() -> Vec<JobListing> {
    vec![JobListing::new(Some("Acme".to_string()), "http://x")]
}

#[test]
fn submit_enabled_tracks_every_field_change() {
    init_logging();
    let state = AppState::new();
    assert!(!state.view().submit_enabled);

    let (state, _) = update(state, Msg::TitleChanged("Eng".to_string()));
    assert!(!state.view().submit_enabled);

    let (state, _) = update(state, Msg::ExperienceSelected("4".to_string()));
    assert!(state.view().submit_enabled);

    let (state, _) = update(state, Msg::TitleChanged("   ".to_string()));
    assert!(!state.view().submit_enabled);
}

#[test]
fn empty_title_never_starts_a_search() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "  ", "2");

    assert!(effects.is_empty());
    assert_eq!(state.request(), &RequestState::Idle);
    assert_eq!(state.latest_token(), 0);
    let view = state.view();
    assert_eq!(view.notifications.len(), 1);
    assert_eq!(view.notifications[0].kind, NotificationKind::Error);
    assert_eq!(view.notifications[0].message, "Please fill in all fields");
    assert!(state.consume_dirty());
}

#[test]
fn missing_experience_never_starts_a_search() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "");

    assert!(effects.is_empty());
    assert_eq!(state.request(), &RequestState::Idle);
}

#[test]
fn unknown_experience_code_keeps_submit_disabled() {
    init_logging();
    let state = fill_form(AppState::new(), "Eng", "9");
    assert!(!state.view().submit_enabled);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.request(), &RequestState::Idle);
    assert_eq!(state.latest_token(), 0);
    assert_eq!(state.view().notifications[0].message, "Please fill in all fields");
}

#[test]
fn query_carries_the_selected_level() {
    let state = fill_form(AppState::new(), "Engineer", " 5 ");
    let query = SearchQuery::from_form(state.form()).unwrap();

    assert_eq!(query.experience_level(), ExperienceLevel::Director);
    assert_eq!(query.experience(), "5");
}

#[test]
fn valid_submit_shows_loading_and_starts_search() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "  Engineer ", "2");

    let query = SearchQuery::from_form(state.form()).unwrap();
    assert_eq!(query.title(), "Engineer");
    assert_eq!(effects, vec![Effect::StartSearch { token: 1, query }]);
    assert!(matches!(state.view().region, ResultRegion::Loading(_)));
    assert_eq!(
        match state.view().region {
            ResultRegion::Loading(loading) => loading.message,
            _ => "",
        },
        "Searching for jobs..."
    );
}

#[test]
fn success_renders_summary_and_scrolls_once() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let token = started_token(&effects);

    let (state, effects) = update(state, Msg::SearchSucceeded { token, jobs: acme() });

    assert_eq!(effects, vec![Effect::ScrollToResults]);
    let ResultRegion::Results(results) = state.view().region else {
        panic!("expected results");
    };
    assert_eq!(
        results.summary(),
        Some("Showing 1 jobs for \"Engineer\" at Entry level level")
    );
    assert_eq!(results.cards().len(), 1);
    assert_eq!(results.cards()[0].company, "Acme");
    assert_eq!(results.cards()[0].link, "http://x");
    assert!(state.notifications().is_empty());
}

#[test]
fn empty_job_list_is_empty_state_not_error() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "3");
    let token = started_token(&effects);

    let (state, _) = update(state, Msg::SearchSucceeded { token, jobs: Vec::new() });

    let ResultRegion::Results(results) = state.view().region else {
        panic!("expected results");
    };
    assert!(results.cards().is_empty());
    assert_eq!(results.summary(), None);
    assert!(state.notifications().is_empty());
}

#[test]
fn application_error_surfaces_server_message() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let token = started_token(&effects);

    let (state, effects) = update(
        state,
        Msg::SearchFailed {
            token,
            failure: SearchFailure::application(Some("Rate limited".to_string())),
        },
    );

    assert_eq!(effects, vec![Effect::ScrollToResults]);
    assert_eq!(state.view().region, ResultRegion::Blank);
    let messages: Vec<_> = state.notifications().iter().map(|n| n.message()).collect();
    assert_eq!(messages, vec!["Rate limited"]);
    assert_eq!(
        state.request(),
        &RequestState::Failed {
            message: "Rate limited".to_string()
        }
    );
}

#[test]
fn transport_failure_uses_fallback_message() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let token = started_token(&effects);

    let (state, effects) = update(
        state,
        Msg::SearchFailed {
            token,
            failure: SearchFailure::transport(),
        },
    );

    assert_eq!(effects, vec![Effect::ScrollToResults]);
    assert!(!state.request().is_loading());
    let notifications: Vec<_> = state.notifications().iter().collect();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind(), NotificationKind::Error);
    assert_eq!(notifications[0].message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn application_error_without_body_matches_transport_path() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let token = started_token(&effects);
    let failure = SearchFailure {
        kind: FailureKind::Application,
        message: None,
    };

    let (state, _) = update(state, Msg::SearchFailed { token, failure });

    let messages: Vec<_> = state.notifications().iter().map(|n| n.message()).collect();
    assert_eq!(messages, vec![FALLBACK_ERROR_MESSAGE]);
}

#[test]
fn failure_clears_previous_results() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            token: started_token(&effects),
            jobs: acme(),
        },
    );
    assert!(matches!(state.view().region, ResultRegion::Results(_)));

    let (state, effects) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::SearchFailed {
            token: started_token(&effects),
            failure: SearchFailure::transport(),
        },
    );

    assert_eq!(state.view().region, ResultRegion::Blank);
}

#[test]
fn late_response_from_superseded_search_is_ignored() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let first = started_token(&effects);
    let (state, effects) = submit(state, "Designer", "4");
    let second = started_token(&effects);
    assert!(second > first);

    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            token: second,
            jobs: acme(),
        },
    );
    assert_eq!(effects, vec![Effect::ScrollToResults]);

    let before = state.view();
    let (state, effects) = update(
        state,
        Msg::SearchFailed {
            token: first,
            failure: SearchFailure::application(Some("boom".to_string())),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
    let ResultRegion::Results(results) = state.view().region else {
        panic!("expected results");
    };
    assert_eq!(
        results.summary(),
        Some("Showing 1 jobs for \"Designer\" at Mid-Senior level")
    );
}

#[test]
fn superseded_response_does_not_end_current_loading() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let first = started_token(&effects);
    let (state, _) = submit(state, "Designer", "4");

    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            token: first,
            jobs: acme(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.request().is_loading());
}

#[test]
fn duplicate_completion_settles_only_once() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let token = started_token(&effects);

    let (state, first) = update(state, Msg::SearchSucceeded { token, jobs: acme() });
    let (_state, second) = update(state, Msg::SearchSucceeded { token, jobs: acme() });

    assert_eq!(first, vec![Effect::ScrollToResults]);
    assert!(second.is_empty());
}

#[test]
fn card_actions_notify_and_open_links() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "Engineer", "2");
    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            token: started_token(&effects),
            jobs: vec![JobListing::new(None, "http://y")],
        },
    );

    let (state, effects) = update(state, Msg::ViewJobClicked { card: 0 });
    assert_eq!(
        effects,
        vec![Effect::OpenLink {
            url: "http://y".to_string()
        }]
    );
    assert!(state.notifications().is_empty());

    let (state, effects) = update(state, Msg::ApplyClicked { card: 0 });
    assert_eq!(effects.len(), 1);
    let (state, effects) = update(state, Msg::SaveClicked { card: 0 });
    assert!(effects.is_empty());

    let notes: Vec<_> = state
        .notifications()
        .iter()
        .map(|n| (n.kind(), n.message().to_string()))
        .collect();
    assert_eq!(
        notes,
        vec![
            (
                NotificationKind::Success,
                "Application submitted for Engineer at Company!".to_string()
            ),
            (
                NotificationKind::Success,
                "Job saved: Engineer at Company".to_string()
            ),
        ]
    );
}

#[test]
fn card_actions_out_of_range_are_noops() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::ApplyClicked { card: 3 });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::SaveClicked { card: 0 });
    assert!(effects.is_empty());
    assert!(state.notifications().is_empty());
}
