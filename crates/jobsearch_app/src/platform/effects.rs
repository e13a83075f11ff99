use std::sync::Arc;

use jobsearch_core::{Effect, JobListing, Msg, SearchFailure};
use jobsearch_engine::{
    BackendError, EngineEvent, EngineHandle, JobRecord, SearchBackend, SearchRequest,
};
use jobsearch_logging::{jobsearch_info, jobsearch_warn};

use super::ui::surface::UiSurface;

/// Executes core effects against the engine and the UI surface.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            engine: EngineHandle::new(backend),
        }
    }

    pub fn run(&self, effects: Vec<Effect>, surface: &mut dyn UiSurface) {
        for effect in effects {
            match effect {
                Effect::StartSearch { token, query } => {
                    jobsearch_info!(
                        "StartSearch token={} title_len={} experience={}",
                        token,
                        query.title().len(),
                        query.experience()
                    );
                    self.engine.enqueue(
                        token,
                        SearchRequest {
                            title: query.title().to_owned(),
                            experience: query.experience().to_owned(),
                        },
                    );
                }
                Effect::ScrollToResults => surface.scroll_to_results(),
                Effect::OpenLink { url } => surface.open_link(&url),
            }
        }
    }

    /// Waits for the next engine completion and converts it into a message.
    pub async fn next_msg(&mut self) -> Option<Msg> {
        self.engine.recv().await.map(map_event)
    }

    pub fn try_next_msg(&mut self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    pub fn in_flight(&self) -> usize {
        self.engine.in_flight()
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { token, result } => match result {
            Ok(records) => Msg::SearchSucceeded {
                token,
                jobs: records.into_iter().map(map_record).collect(),
            },
            Err(err) => {
                jobsearch_warn!("Search {} failed: {}", token, err);
                Msg::SearchFailed {
                    token,
                    failure: map_failure(err),
                }
            }
        },
    }
}

fn map_record(record: JobRecord) -> JobListing {
    JobListing::new(record.company, record.link)
}

fn map_failure(err: BackendError) -> SearchFailure {
    if err.is_application_error() {
        SearchFailure::application(err.server_message)
    } else {
        SearchFailure::transport()
    }
}
