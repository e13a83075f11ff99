use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
}

/// Submit affordance for the current form values.
///
/// Recomputed on every keystroke and selection, not only on submit.
pub fn is_submit_enabled(title: &str, experience: &str) -> bool {
    !title.trim().is_empty() && crate::ExperienceLevel::from_code(experience).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_title_disables_submit() {
        assert!(!is_submit_enabled("   ", "2"));
        assert!(!is_submit_enabled("Engineer", ""));
        assert!(is_submit_enabled(" Engineer ", "2"));
    }

    #[test]
    fn unknown_experience_code_disables_submit() {
        assert!(!is_submit_enabled("Engineer", "9"));
        assert!(!is_submit_enabled("Engineer", "0"));
        assert!(!is_submit_enabled("Engineer", "senior"));
    }
}
