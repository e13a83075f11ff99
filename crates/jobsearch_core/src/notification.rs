//! Transient, self-dismissing messages.
//!
//! Every notification owns a single pending phase timer. Advancing the channel
//! clock fires due timers in order; a manual dismissal replaces whatever timer
//! is pending with the exit timer. Nothing here reads a clock: callers pass the
//! current time, measured from an arbitrary origin.

use std::time::Duration;

use jobsearch_logging::{jobsearch_debug, jobsearch_trace};

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Error => "exclamation-circle",
            NotificationKind::Info | NotificationKind::Success => "info-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationPhase {
    Created,
    Entering,
    Visible,
    Dismissing,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    /// Delay between creation and the start of the entry transition.
    pub entry_delay: Duration,
    /// Length of the entry transition.
    pub enter_transition: Duration,
    /// How long the notification stays up, measured from the start of entry.
    pub display: Duration,
    /// Exit transition before the notification is removed.
    pub exit: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            entry_delay: Duration::from_millis(100),
            enter_transition: Duration::from_millis(300),
            display: Duration::from_millis(5000),
            exit: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PhaseTimer {
    due: Duration,
    next: NotificationPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    kind: NotificationKind,
    created_at: Duration,
    phase: NotificationPhase,
    entered_at: Option<Duration>,
    timer: Option<PhaseTimer>,
}

impl Notification {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    /// Time at which the pending phase change fires, if any.
    pub fn next_transition(&self) -> Option<Duration> {
        self.timer.map(|timer| timer.due)
    }

    fn fire(&mut self, timer: PhaseTimer, timings: &NotificationTimings) {
        self.phase = timer.next;
        self.timer = match timer.next {
            NotificationPhase::Created => None,
            NotificationPhase::Entering => {
                self.entered_at = Some(timer.due);
                Some(PhaseTimer {
                    due: timer.due + timings.enter_transition,
                    next: NotificationPhase::Visible,
                })
            }
            NotificationPhase::Visible => {
                let entered_at = self.entered_at.unwrap_or(timer.due);
                Some(PhaseTimer {
                    due: (entered_at + timings.display).max(timer.due),
                    next: NotificationPhase::Dismissing,
                })
            }
            NotificationPhase::Dismissing => Some(PhaseTimer {
                due: timer.due + timings.exit,
                next: NotificationPhase::Removed,
            }),
            NotificationPhase::Removed => None,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationChannel {
    timings: NotificationTimings,
    next_id: NotificationId,
    items: Vec<Notification>,
}

impl NotificationChannel {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            next_id: 0,
            items: Vec::new(),
        }
    }

    pub fn timings(&self) -> &NotificationTimings {
        &self.timings
    }

    /// Enqueues a notification and returns immediately.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Duration,
    ) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        let message = message.into();
        jobsearch_debug!("notification {} ({}) created: {}", id, kind.as_str(), message);
        self.items.push(Notification {
            id,
            message,
            kind,
            created_at: now,
            phase: NotificationPhase::Created,
            entered_at: None,
            timer: Some(PhaseTimer {
                due: now + self.timings.entry_delay,
                next: NotificationPhase::Entering,
            }),
        });
        id
    }

    /// Manual close. Skips straight to the exit transition.
    ///
    /// Returns `false` when the notification is unknown or already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Duration) -> bool {
        let exit = self.timings.exit;
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        match item.phase {
            NotificationPhase::Created | NotificationPhase::Entering | NotificationPhase::Visible => {
                item.phase = NotificationPhase::Dismissing;
                item.timer = Some(PhaseTimer {
                    due: now + exit,
                    next: NotificationPhase::Removed,
                });
                jobsearch_debug!("notification {} dismissed by user", id);
                true
            }
            NotificationPhase::Dismissing | NotificationPhase::Removed => false,
        }
    }

    /// Fires every timer due at or before `now` and drops removed notifications.
    ///
    /// Returns `true` if any notification changed phase.
    pub fn advance(&mut self, now: Duration) -> bool {
        let timings = self.timings;
        let mut changed = false;
        for item in &mut self.items {
            while let Some(timer) = item.timer.filter(|timer| timer.due <= now) {
                item.fire(timer, &timings);
                jobsearch_trace!("notification {} -> {:?}", item.id, item.phase);
                changed = true;
            }
        }
        self.items.retain(|item| {
            let keep = item.phase != NotificationPhase::Removed;
            if !keep {
                jobsearch_debug!("notification {} removed", item.id);
            }
            keep
        });
        changed
    }

    /// Earliest pending timer across all notifications.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.items.iter().filter_map(Notification::next_transition).min()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Live notifications in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
