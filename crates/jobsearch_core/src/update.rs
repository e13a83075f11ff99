use jobsearch_logging::{jobsearch_debug, jobsearch_info, jobsearch_warn};

use crate::{
    AppState, Effect, Msg, NotificationKind, RequestState, RequestToken, SearchQuery,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TitleChanged(title) => {
            state.set_title(title);
            Vec::new()
        }
        Msg::ExperienceSelected(code) => {
            state.set_experience(code);
            Vec::new()
        }
        Msg::SubmitClicked => match SearchQuery::from_form(state.form()) {
            Ok(query) => {
                if state.request().is_loading() {
                    jobsearch_info!(
                        "superseding outstanding request {}",
                        state.latest_token()
                    );
                }
                let token = state.begin_request(query.clone());
                jobsearch_info!(
                    "search {} submitted title={:?} experience={}",
                    token,
                    query.title(),
                    query.experience()
                );
                vec![Effect::StartSearch { token, query }]
            }
            Err(err) => {
                jobsearch_debug!("submit rejected: {}", err);
                state.notify(err.to_string(), NotificationKind::Error);
                Vec::new()
            }
        },
        Msg::SearchSucceeded { token, jobs } => settle(&mut state, token, |state, query| {
            jobsearch_info!("search {} returned {} jobs", token, jobs.len());
            state.set_request(RequestState::Succeeded { jobs, query });
        }),
        Msg::SearchFailed { token, failure } => settle(&mut state, token, |state, _query| {
            let message = failure.user_message().to_owned();
            jobsearch_warn!("search {} failed ({:?}): {}", token, failure.kind, message);
            state.set_request(RequestState::Failed {
                message: message.clone(),
            });
            state.notify(message, NotificationKind::Error);
        }),
        Msg::ViewJobClicked { card } => match state.job_at(card) {
            Some((job, _)) => open_link(&job.link),
            None => Vec::new(),
        },
        Msg::ApplyClicked { card } => match state.job_at(card) {
            Some((job, query)) => {
                let message = format!(
                    "Application submitted for {} at {}!",
                    query.title(),
                    job.company_or_placeholder()
                );
                let effects = open_link(&job.link);
                state.notify(message, NotificationKind::Success);
                effects
            }
            None => Vec::new(),
        },
        Msg::SaveClicked { card } => {
            if let Some((job, query)) = state.job_at(card) {
                let message = format!(
                    "Job saved: {} at {}",
                    query.title(),
                    job.company_or_placeholder()
                );
                state.notify(message, NotificationKind::Success);
            }
            Vec::new()
        }
        Msg::NotificationDismissed { id } => {
            state.dismiss(id);
            Vec::new()
        }
        Msg::Tick { now } => {
            state.advance_clock(now);
            Vec::new()
        }
    };

    (state, effects)
}

/// Applies the outcome of request `token` and then runs the post-request step.
///
/// Responses for anything but the current request are dropped without
/// touching state. Loading is cleared before `apply` runs, and the scroll
/// effect is emitted after it, exactly once per settled request.
fn settle(
    state: &mut AppState,
    token: RequestToken,
    apply: impl FnOnce(&mut AppState, SearchQuery),
) -> Vec<Effect> {
    let Some(query) = state.take_loading_query(token) else {
        jobsearch_debug!(
            "dropping stale response for search {} (latest {})",
            token,
            state.latest_token()
        );
        return Vec::new();
    };

    apply(state, query);

    state.mark_dirty();
    vec![Effect::ScrollToResults]
}

fn open_link(link: &str) -> Vec<Effect> {
    if link.trim().is_empty() {
        return Vec::new();
    }
    vec![Effect::OpenLink {
        url: link.to_owned(),
    }]
}
