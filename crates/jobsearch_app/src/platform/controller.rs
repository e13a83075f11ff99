use std::sync::Arc;
use std::time::Duration;

use jobsearch_core::{
    update, AppState, AppViewModel, FormState, Msg, NotificationTimings,
};
use jobsearch_engine::{Clock, SearchBackend};
use jobsearch_logging::{clear_current_request, set_current_request};

use super::effects::EffectRunner;
use super::ui::surface::UiSurface;

/// Owns the live `AppState` and wires it to the backend, the clock, and a surface.
///
/// All mutation happens through `dispatch`, on the caller's thread.
pub struct SearchController<S: UiSurface> {
    state: AppState,
    runner: EffectRunner,
    clock: Arc<dyn Clock>,
    surface: S,
}

impl<S: UiSurface> SearchController<S> {
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        clock: Arc<dyn Clock>,
        timings: NotificationTimings,
        surface: S,
    ) -> Self {
        Self {
            state: AppState::with_timings(timings),
            runner: EffectRunner::new(backend),
            clock,
            surface,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Draws the current view unconditionally.
    pub fn render_now(&mut self) {
        self.state.consume_dirty();
        let view = self.state.view();
        self.surface.render(&view);
    }

    /// Brings the clock up to date, then applies `msg`.
    pub fn dispatch(&mut self, msg: Msg) {
        self.apply(Msg::Tick {
            now: self.clock.now(),
        });
        self.apply(msg);
    }

    /// Fills the form from `form` and submits it.
    pub fn submit(&mut self, form: FormState) {
        self.dispatch(Msg::TitleChanged(form.title));
        self.dispatch(Msg::ExperienceSelected(form.experience));
        self.dispatch(Msg::SubmitClicked);
    }

    /// Advances notification timers to the clock's current time.
    pub fn tick(&mut self) {
        self.apply(Msg::Tick {
            now: self.clock.now(),
        });
    }

    /// Earliest time at which a notification changes phase.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.notifications().next_deadline()
    }

    /// Waits for the next backend completion without applying it.
    pub async fn next_completion(&mut self) -> Option<Msg> {
        self.runner.next_msg().await
    }

    /// Waits for one backend completion and applies it. Returns `false` if none can arrive.
    pub async fn process_next_completion(&mut self) -> bool {
        if self.runner.in_flight() == 0 {
            if let Some(msg) = self.runner.try_next_msg() {
                self.dispatch(msg);
                return true;
            }
            return false;
        }
        match self.runner.next_msg().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Applies completions until no search is outstanding.
    pub async fn settle(&mut self) {
        while self.process_next_completion().await {}
    }

    fn apply(&mut self, msg: Msg) {
        let token = match &msg {
            Msg::SearchSucceeded { token, .. } | Msg::SearchFailed { token, .. } => Some(*token),
            _ => None,
        };
        if let Some(token) = token {
            set_current_request(token);
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        // Effects act on what is already on screen: scroll after the results frame,
        // network after the loading frame.
        if state.consume_dirty() {
            self.surface.render(&state.view());
        }
        self.state = state;
        self.runner.run(effects, &mut self.surface);

        if token.is_some() {
            clear_current_request();
        }
    }
}
