//! Status Notices
//!
//! Short-lived messages shown after an operation succeeds or fails.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier class on the message area
    pub fn as_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A message currently on screen
///
/// `seq` grows with every notice, so a dismissal timer can tell whether
/// its notice has since been replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn css_class(&self) -> String {
        format!("message {}", self.kind.as_class())
    }
}

/// User-visible operations that can report a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Add,
    Update,
    Delete,
}

impl Action {
    /// Wording for a failed attempt.
    ///
    /// A server rejection reads "Failed to ..."; a request that never
    /// produced a usable answer reads "Error ...".
    pub fn failure_message(self, err: &ApiError) -> &'static str {
        match (self, err.is_status()) {
            (Action::Load, true) => "Failed to load todos",
            (Action::Load, false) => "Error loading todos",
            (Action::Add, true) => "Failed to add todo",
            (Action::Add, false) => "Error adding todo",
            (Action::Update, true) => "Failed to update todo",
            (Action::Update, false) => "Error updating todo",
            (Action::Delete, true) => "Failed to delete todo",
            (Action::Delete, false) => "Error deleting todo",
        }
    }

    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Action::Add => Some("Todo added!"),
            Action::Delete => Some("Todo deleted!"),
            Action::Load | Action::Update => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_wording_by_error_kind() {
        let status = ApiError::Status(500);
        let transport = ApiError::Transport("offline".into());
        let decode = ApiError::Decode("bad json".into());

        assert_eq!(Action::Add.failure_message(&status), "Failed to add todo");
        assert_eq!(Action::Add.failure_message(&transport), "Error adding todo");
        assert_eq!(Action::Load.failure_message(&decode), "Error loading todos");
        assert_eq!(Action::Delete.failure_message(&status), "Failed to delete todo");
        assert_eq!(Action::Update.failure_message(&transport), "Error updating todo");
    }

    #[test]
    fn test_success_wording() {
        assert_eq!(Action::Add.success_message(), Some("Todo added!"));
        assert_eq!(Action::Delete.success_message(), Some("Todo deleted!"));
        assert_eq!(Action::Update.success_message(), None);
    }

    #[test]
    fn test_css_class() {
        let notice = Notice { seq: 1, kind: NoticeKind::Error, text: "x".into() };
        assert_eq!(notice.css_class(), "message error");
    }
}
