use std::fmt;

use crate::view_model::EmptyStateView;
use crate::{ExperienceLevel, JobListing};

pub const EMPTY_STATE_HEADING: &str = "No jobs found";
const EMPTY_STATE_MESSAGE: &str =
    "No jobs match your criteria. Try adjusting your experience level or job title.";
const UNKNOWN_EXPERIENCE_LABEL: &str = "Unknown";

/// Content of the result region after a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Empty(EmptyStateView),
    Jobs {
        summary: String,
        cards: Vec<JobCardView>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    /// Position in the result list; card actions refer to it.
    pub index: usize,
    pub company: String,
    pub link: String,
    pub view_label: &'static str,
    pub apply_label: &'static str,
    pub save_label: &'static str,
}

impl ResultView {
    pub fn empty() -> Self {
        ResultView::Empty(EmptyStateView {
            icon: "search",
            heading: EMPTY_STATE_HEADING,
            message: EMPTY_STATE_MESSAGE,
        })
    }

    pub fn cards(&self) -> &[JobCardView] {
        match self {
            ResultView::Empty(_) => &[],
            ResultView::Jobs { cards, .. } => cards,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            ResultView::Empty(_) => None,
            ResultView::Jobs { summary, .. } => Some(summary),
        }
    }
}

/// Maps a job list and the query that produced it to a full replacement of the result region.
///
/// Pure and total: identical inputs give identical output, and an experience
/// code outside the known range renders with a placeholder label.
pub fn render_results(jobs: &[JobListing], title: &str, experience: &str) -> ResultView {
    if jobs.is_empty() {
        return ResultView::empty();
    }

    let label = ExperienceLevel::from_code(experience)
        .map(ExperienceLevel::label)
        .unwrap_or(UNKNOWN_EXPERIENCE_LABEL);
    let summary = format!(
        "Showing {} jobs for \"{}\" at {} level",
        jobs.len(),
        title,
        label
    );
    let cards = jobs
        .iter()
        .enumerate()
        .map(|(index, job)| JobCardView {
            index,
            company: job.company_or_placeholder().to_owned(),
            link: job.link.clone(),
            view_label: "View Job",
            apply_label: "Apply Now",
            save_label: "Save",
        })
        .collect();

    ResultView::Jobs { summary, cards }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultView::Empty(empty) => {
                writeln!(f, "[{}] {}", empty.icon, empty.heading)?;
                writeln!(f, "{}", empty.message)
            }
            ResultView::Jobs { summary, cards } => {
                writeln!(f, "{summary}")?;
                for card in cards {
                    writeln!(
                        f,
                        "  #{} {} | {} <{}> | {} | {}",
                        card.index + 1,
                        card.company,
                        card.view_label,
                        card.link,
                        card.apply_label,
                        card.save_label
                    )?;
                }
                Ok(())
            }
        }
    }
}
