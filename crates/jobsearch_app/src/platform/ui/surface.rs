use std::io::Write;

use chrono::{DateTime, Local};
use jobsearch_core::AppViewModel;
use jobsearch_logging::{jobsearch_info, jobsearch_warn};

use super::render::render;
use crate::platform::input::{InputError, HELP_TEXT};

/// The page regions the controller writes to.
pub trait UiSurface {
    /// Replaces everything on screen with `view`.
    fn render(&mut self, view: &AppViewModel);
    fn scroll_to_results(&mut self);
    /// Opens `url` in a new browsing context.
    fn open_link(&mut self, url: &str);
}

/// Line-oriented surface writing to any `Write` sink, usually stdout.
pub struct TerminalSurface<W: Write> {
    out: W,
    started_at: DateTime<Local>,
    last_frame: Vec<String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            started_at: Local::now(),
            last_frame: Vec::new(),
        }
    }

    pub fn show_help(&mut self) {
        self.write_lines(HELP_TEXT.lines().map(ToOwned::to_owned).collect());
    }

    pub fn show_input_error(&mut self, err: &InputError) {
        self.write_lines(vec![format!("! {err} (type `help`)")]);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: Vec<String>) {
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(self.out, "{line}"))
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            jobsearch_warn!("Failed to write to terminal: {}", err);
        }
    }
}

impl<W: Write> UiSurface for TerminalSurface<W> {
    fn render(&mut self, view: &AppViewModel) {
        let frame = render(view, self.started_at);
        if frame == self.last_frame {
            return;
        }
        let mut lines = vec![String::from("----")];
        lines.extend(frame.iter().cloned());
        self.write_lines(lines);
        self.last_frame = frame;
    }

    fn scroll_to_results(&mut self) {
        self.write_lines(vec![String::from("==> results")]);
    }

    fn open_link(&mut self, url: &str) {
        jobsearch_info!("Opening job link {}", url);
        self.write_lines(vec![format!("Opening {url} in a new window")]);
    }
}
