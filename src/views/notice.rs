//! Transient user-facing notifications.

/// A one-shot notification raised by a view controller.
///
/// The shell is expected to take and display it (the toast of a browser
/// UI); controllers overwrite any notice that was never consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    /// The text to show, regardless of severity.
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Warning(message) | Notice::Error(message) => {
                message
            }
        }
    }

    /// True for [`Notice::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}
