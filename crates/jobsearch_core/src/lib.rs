//! Job search core: pure request/notification state machine and view-model helpers.
mod effect;
mod model;
mod msg;
mod notification;
mod render;
mod state;
mod update;
mod validation;
mod view_model;

pub use effect::Effect;
pub use model::{
    ExperienceLevel, FailureKind, FormState, JobListing, RequestState, RequestToken,
    SearchFailure, SearchQuery, FALLBACK_ERROR_MESSAGE,
};
pub use msg::Msg;
pub use notification::{
    Notification, NotificationChannel, NotificationId, NotificationKind, NotificationPhase,
    NotificationTimings,
};
pub use render::{render_results, JobCardView, ResultView, EMPTY_STATE_HEADING};
pub use state::AppState;
pub use update::update;
pub use validation::{is_submit_enabled, ValidationError};
pub use view_model::{
    AppViewModel, EmptyStateView, LoadingView, NotificationView, ResultRegion,
};
