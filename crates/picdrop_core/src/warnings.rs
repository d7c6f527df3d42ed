//! Warning messages shown in the dialog's error panels.

/// Stack of warnings, newest last.
#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    messages: Vec<String>,
}

impl WarningLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Dismiss the newest warning. Returns the message to show next, if any.
    pub fn dismiss(&mut self) -> Option<&str> {
        self.messages.pop();
        self.current()
    }

    /// The message currently on display.
    pub fn current(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Number of outstanding warnings
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no warnings are outstanding
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_shows_previous() {
        let mut log = WarningLog::new();
        log.push("first");
        log.push("second");
        assert_eq!(log.current(), Some("second"));

        assert_eq!(log.dismiss(), Some("first"));
        assert_eq!(log.dismiss(), None);
        assert!(log.is_empty());
        assert_eq!(log.dismiss(), None);
    }
}
