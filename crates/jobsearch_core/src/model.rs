use std::fmt;

/// Monotonic identifier of a submitted search; the highest issued token is current.
pub type RequestToken = u64;

/// Message shown when a failed search carries no server-supplied text.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch jobs";

/// LinkedIn-style seniority filter, encoded on the wire as `"1"`..`"6"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    Internship,
    EntryLevel,
    Associate,
    MidSenior,
    Director,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::Internship,
        ExperienceLevel::EntryLevel,
        ExperienceLevel::Associate,
        ExperienceLevel::MidSenior,
        ExperienceLevel::Director,
        ExperienceLevel::Executive,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(ExperienceLevel::Internship),
            "2" => Some(ExperienceLevel::EntryLevel),
            "3" => Some(ExperienceLevel::Associate),
            "4" => Some(ExperienceLevel::MidSenior),
            "5" => Some(ExperienceLevel::Director),
            "6" => Some(ExperienceLevel::Executive),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "1",
            ExperienceLevel::EntryLevel => "2",
            ExperienceLevel::Associate => "3",
            ExperienceLevel::MidSenior => "4",
            ExperienceLevel::Director => "5",
            ExperienceLevel::Executive => "6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "Internship",
            ExperienceLevel::EntryLevel => "Entry level",
            ExperienceLevel::Associate => "Associate",
            ExperienceLevel::MidSenior => "Mid-Senior",
            ExperienceLevel::Director => "Director",
            ExperienceLevel::Executive => "Executive",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw values of the search form, exactly as the user left them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub title: String,
    /// Selected experience code; empty when nothing is selected.
    pub experience: String,
}

impl FormState {
    pub fn new(title: impl Into<String>, experience: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            experience: experience.into(),
        }
    }
}

/// A validated search, frozen at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    title: String,
    experience: ExperienceLevel,
}

impl SearchQuery {
    /// Builds a query from form fields. The title is trimmed and must be non-empty;
    /// the experience code must name one of the six levels.
    pub fn from_form(form: &FormState) -> Result<Self, crate::ValidationError> {
        let title = form.title.trim();
        let experience = ExperienceLevel::from_code(&form.experience);
        match experience {
            Some(experience) if !title.is_empty() => Ok(Self {
                title: title.to_owned(),
                experience,
            }),
            _ => Err(crate::ValidationError::MissingFields),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Experience code as sent to the backend.
    pub fn experience(&self) -> &'static str {
        self.experience.code()
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience
    }
}

/// One job returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub company: Option<String>,
    pub link: String,
}

impl JobListing {
    pub const COMPANY_PLACEHOLDER: &'static str = "Company";

    pub fn new(company: Option<String>, link: impl Into<String>) -> Self {
        Self {
            company,
            link: link.into(),
        }
    }

    /// Company name, or the placeholder when absent or blank.
    pub fn company_or_placeholder(&self) -> &str {
        match self.company.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => Self::COMPANY_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network unreachable, timeout, or an unreadable response body.
    Transport,
    /// The backend answered with a non-success status.
    Application,
}

/// Outcome of a failed search as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
    pub kind: FailureKind,
    /// Server-supplied error text, when the response carried one.
    pub message: Option<String>,
}

impl SearchFailure {
    pub fn transport() -> Self {
        Self {
            kind: FailureKind::Transport,
            message: None,
        }
    }

    pub fn application(message: Option<String>) -> Self {
        Self {
            kind: FailureKind::Application,
            message,
        }
    }

    /// Text surfaced to the user. Transport and application failures share this path.
    pub fn user_message(&self) -> &str {
        match self.message.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => message,
            _ => FALLBACK_ERROR_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        token: RequestToken,
        query: SearchQuery,
    },
    Succeeded {
        jobs: Vec<JobListing>,
        query: SearchQuery,
    },
    Failed {
        message: String,
    },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }
}
