use std::time::Duration;

use crate::{NotificationId, NotificationKind, NotificationPhase, ResultView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStateView {
    pub icon: &'static str,
    pub heading: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingView {
    pub message: &'static str,
}

impl Default for LoadingView {
    fn default() -> Self {
        Self {
            message: "Searching for jobs...",
        }
    }
}

/// What the single result region shows. Loading and results are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultRegion {
    #[default]
    Blank,
    Loading(LoadingView),
    Results(ResultView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub icon: &'static str,
    pub phase: NotificationPhase,
    pub created_at: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub title: String,
    pub experience: String,
    pub submit_enabled: bool,
    pub region: ResultRegion,
    pub notifications: Vec<NotificationView>,
    pub dirty: bool,
}
