//! Maps typed commands onto the form, card, and notification controls.

use jobsearch_core::{ExperienceLevel, Msg};
use thiserror::Error;

pub const HELP_TEXT: &str = "\
Commands:
  title <text>     set the job title
  exp <1-6|none>   select experience (1 Internship .. 6 Executive)
  submit           run the search
  view <n>         open job #n
  apply <n>        apply to job #n
  save <n>         save job #n
  dismiss <id>     close notification <id>
  help             show this text
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a positive number")]
    InvalidNumber(String),
    #[error("unknown experience level `{0}`")]
    UnknownExperience(String),
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    let msg = match word.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        // Raw text, like a keystroke in the title box; validation happens downstream.
        "title" => Msg::TitleChanged(rest.trim_end_matches(['\r', '\n']).to_string()),
        "exp" | "experience" => Msg::ExperienceSelected(parse_experience(rest)?),
        "submit" | "search" => Msg::SubmitClicked,
        "view" => Msg::ViewJobClicked {
            card: parse_card(rest, "view")?,
        },
        "apply" => Msg::ApplyClicked {
            card: parse_card(rest, "apply")?,
        },
        "save" => Msg::SaveClicked {
            card: parse_card(rest, "save")?,
        },
        "dismiss" | "close" => Msg::NotificationDismissed {
            id: parse_positive(rest, "dismiss")?,
        },
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

/// The selector only offers the six known levels plus "nothing selected".
fn parse_experience(raw: &str) -> Result<String, InputError> {
    let raw = raw.trim();
    match raw {
        "" => Err(InputError::MissingArgument("exp")),
        "none" | "-" => Ok(String::new()),
        code => ExperienceLevel::from_code(code)
            .map(|level| level.code().to_string())
            .ok_or_else(|| InputError::UnknownExperience(code.to_string())),
    }
}

/// Cards are shown 1-based.
fn parse_card(raw: &str, command: &'static str) -> Result<usize, InputError> {
    let number = parse_positive(raw, command)?;
    usize::try_from(number - 1).map_err(|_| InputError::InvalidNumber(raw.trim().to_string()))
}

fn parse_positive(raw: &str, command: &'static str) -> Result<u64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::MissingArgument(command));
    }
    match raw.parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(InputError::InvalidNumber(raw.to_string())),
    }
}
