use std::time::Duration;

use crate::view_model::{AppViewModel, LoadingView, NotificationView, ResultRegion};
use crate::{
    is_submit_enabled, render_results, FormState, JobListing, NotificationChannel,
    NotificationId, NotificationKind, NotificationTimings, RequestState, RequestToken,
    SearchQuery,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: FormState,
    request: RequestState,
    last_token: RequestToken,
    notifications: NotificationChannel,
    now: Duration,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timings(timings: NotificationTimings) -> Self {
        Self {
            notifications: NotificationChannel::new(timings),
            ..Self::default()
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// Token of the most recent submit, or 0 before the first one.
    pub fn latest_token(&self) -> RequestToken {
        self.last_token
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn view(&self) -> AppViewModel {
        let region = match &self.request {
            RequestState::Idle | RequestState::Failed { .. } => ResultRegion::Blank,
            RequestState::Loading { .. } => ResultRegion::Loading(LoadingView::default()),
            RequestState::Succeeded { jobs, query } => {
                ResultRegion::Results(render_results(jobs, query.title(), query.experience()))
            }
        };
        let notifications = self
            .notifications
            .iter()
            .map(|item| NotificationView {
                id: item.id(),
                message: item.message().to_owned(),
                kind: item.kind(),
                icon: item.kind().icon(),
                phase: item.phase(),
                created_at: item.created_at(),
            })
            .collect();

        AppViewModel {
            title: self.form.title.clone(),
            experience: self.form.experience.clone(),
            submit_enabled: is_submit_enabled(&self.form.title, &self.form.experience),
            region,
            notifications,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_title(&mut self, title: String) {
        if self.form.title != title {
            self.form.title = title;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_experience(&mut self, experience: String) {
        if self.form.experience != experience {
            self.form.experience = experience;
            self.mark_dirty();
        }
    }

    /// Moves to `Loading` for a new query and returns its token.
    ///
    /// Any request still outstanding is superseded.
    pub(crate) fn begin_request(&mut self, query: SearchQuery) -> RequestToken {
        self.last_token += 1;
        let token = self.last_token;
        self.request = RequestState::Loading { token, query };
        self.mark_dirty();
        token
    }

    /// Leaves `Loading` if `token` is the current request, returning its query.
    ///
    /// The request state is `Idle` until the caller stores the outcome.
    pub(crate) fn take_loading_query(&mut self, token: RequestToken) -> Option<SearchQuery> {
        let is_current = matches!(
            &self.request,
            RequestState::Loading { token: current, .. } if *current == token
        );
        if !is_current {
            return None;
        }
        match std::mem::take(&mut self.request) {
            RequestState::Loading { query, .. } => Some(query),
            _ => None,
        }
    }

    pub(crate) fn set_request(&mut self, request: RequestState) {
        self.request = request;
        self.mark_dirty();
    }

    /// Job shown on result card `card`, with the query that produced it.
    pub(crate) fn job_at(&self, card: usize) -> Option<(&JobListing, &SearchQuery)> {
        match &self.request {
            RequestState::Succeeded { jobs, query } => jobs.get(card).map(|job| (job, query)),
            _ => None,
        }
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.notify(message, kind, self.now);
        self.mark_dirty();
    }

    pub(crate) fn dismiss(&mut self, id: NotificationId) {
        if self.notifications.dismiss(id, self.now) {
            self.mark_dirty();
        }
    }

    pub(crate) fn advance_clock(&mut self, now: Duration) {
        self.now = self.now.max(now);
        if self.notifications.advance(self.now) {
            self.mark_dirty();
        }
    }
}
