use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyErrorKind {
    DuplicateActionName,
    ConflictingActionRedefinition,
    UnknownActionId,
    UnknownActionName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError {
    pub kind: NotifyErrorKind,
    pub message: String,
}

impl NotifyError {
    pub fn new(kind: NotifyErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NotifyError {}

pub fn duplicate_action_name(message: impl Into<String>) -> NotifyError {
    NotifyError::new(NotifyErrorKind::DuplicateActionName, message)
}

pub fn conflicting_redefinition(message: impl Into<String>) -> NotifyError {
    NotifyError::new(NotifyErrorKind::ConflictingActionRedefinition, message)
}

pub fn unknown_action_id(message: impl Into<String>) -> NotifyError {
    NotifyError::new(NotifyErrorKind::UnknownActionId, message)
}

pub fn unknown_action_name(message: impl Into<String>) -> NotifyError {
    NotifyError::new(NotifyErrorKind::UnknownActionName, message)
}
