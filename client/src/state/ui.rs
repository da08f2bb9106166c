//! Transient notification state.
//!
//! DESIGN
//! ======
//! Every caught failure (network, non-2xx, input validation) surfaces here
//! as a transient notice rather than crashing the page. Notices carry a
//! monotonically increasing id so dismissal survives reordering.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a notice, mapped to styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Notification queue shared via context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl UiState {
    /// Append a notice and return its id for later dismissal.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice { id, level, message: message.into() });
        id
    }

    /// Remove the notice with `id`, if still present.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }
}
