use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the job title field (every keystroke).
    TitleChanged(String),
    /// User picked an experience level; empty string clears the selection.
    ExperienceSelected(String),
    /// User submitted the search form.
    SubmitClicked,
    /// Engine completion for a search that returned a job list.
    SearchSucceeded {
        token: crate::RequestToken,
        jobs: Vec<crate::JobListing>,
    },
    /// Engine completion for a search that failed at any layer.
    SearchFailed {
        token: crate::RequestToken,
        failure: crate::SearchFailure,
    },
    /// User clicked "View Job" on a result card.
    ViewJobClicked { card: usize },
    /// User clicked "Apply Now" on a result card.
    ApplyClicked { card: usize },
    /// User clicked the save button on a result card.
    SaveClicked { card: usize },
    /// User clicked the close button of a notification.
    NotificationDismissed { id: crate::NotificationId },
    /// Clock tick; `now` is measured from the controller's time origin.
    Tick { now: Duration },
}
