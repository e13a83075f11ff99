use std::time::Duration;

use chrono::{DateTime, Local};
use jobsearch_core::{
    AppViewModel, ExperienceLevel, NotificationPhase, NotificationView, ResultRegion,
};

/// Renders the full view as terminal lines: form, result region, notification layer.
pub fn render(view: &AppViewModel, started_at: DateTime<Local>) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format_form(view));

    match &view.region {
        ResultRegion::Blank => {}
        ResultRegion::Loading(loading) => lines.push(format!("[spinner] {}", loading.message)),
        ResultRegion::Results(results) => {
            lines.extend(results.to_string().lines().map(ToOwned::to_owned));
        }
    }

    lines.extend(
        view.notifications
            .iter()
            .filter_map(|item| format_notification(item, started_at)),
    );

    lines
}

fn format_form(view: &AppViewModel) -> String {
    let experience = match view.experience.as_str() {
        "" => "-".to_string(),
        code => ExperienceLevel::from_code(code)
            .map(|level| level.label().to_string())
            .unwrap_or_else(|| code.to_string()),
    };
    let button = if view.submit_enabled {
        "[Search]"
    } else {
        "(Search disabled)"
    };
    format!(
        "Title: \"{}\" | Experience: {} | {}",
        view.title, experience, button
    )
}

/// Notifications waiting for their entry delay are not drawn yet.
fn format_notification(item: &NotificationView, started_at: DateTime<Local>) -> Option<String> {
    let marker = match item.phase {
        NotificationPhase::Created | NotificationPhase::Removed => return None,
        NotificationPhase::Entering => ">",
        NotificationPhase::Visible => "*",
        NotificationPhase::Dismissing => "~",
    };
    Some(format!(
        "{marker} [{}] ({}:{}) {}  [x {}]",
        wall_time(started_at, item.created_at),
        item.kind.as_str(),
        item.icon,
        item.message,
        item.id
    ))
}

fn wall_time(started_at: DateTime<Local>, offset: Duration) -> String {
    let at = chrono::Duration::from_std(offset)
        .ok()
        .and_then(|delta| started_at.checked_add_signed(delta))
        .unwrap_or(started_at);
    at.format("%H:%M:%S").to_string()
}
