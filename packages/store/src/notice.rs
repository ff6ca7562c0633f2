use std::time::Duration;

/// How long a notice stays on screen before it dismisses itself.
pub const NOTICE_AUTO_HIDE: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A transient message shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}

/// Identifies one showing of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeStamp(u64);

/// Counts notice showings so an auto-hide timer only dismisses the notice it
/// was started for, even when a later notice carries the same text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoticeClock {
    shown: u64,
}

impl NoticeClock {
    /// Record a change of the shown notice; earlier stamps go stale.
    pub fn restart(&mut self) -> NoticeStamp {
        self.shown += 1;
        NoticeStamp(self.shown)
    }

    pub fn is_current(&self, stamp: NoticeStamp) -> bool {
        stamp.0 == self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_identical_notice_gets_fresh_timer() {
        let mut clock = NoticeClock::default();
        let first = Notice::error("Invalid credentials");
        let first_stamp = clock.restart();
        let second = Notice::error("Invalid credentials");
        let second_stamp = clock.restart();

        assert_eq!(first, second);
        assert!(!clock.is_current(first_stamp));
        assert!(clock.is_current(second_stamp));
    }

    #[test]
    fn test_clearing_invalidates_pending_timer() {
        let mut clock = NoticeClock::default();
        let shown = clock.restart();
        let _cleared = clock.restart();
        assert!(!clock.is_current(shown));
    }

    #[test]
    fn test_severity_classes() {
        assert!(Notice::success("Login successful!").is_success());
        assert!(!Notice::error("Login failed").is_success());
        assert_eq!(Severity::Error.as_str(), "error");
    }
}
