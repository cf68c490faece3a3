//! Success/error banner state for list pages.
//!
//! A page shows at most one notification. Every notification gets a fresh
//! ticket; a timer that fires for an older ticket must not clear a newer
//! message, so expiry is always keyed by ticket.

/// Lifetime of a transient notification
pub const NOTIFICATION_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub ticket: u64,
    /// Sticky notifications survive the TTL and stay until dismissed or replaced
    pub sticky: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    last_ticket: u64,
}

impl NotificationCenter {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(message.into(), NotificationKind::Success, false)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(message.into(), NotificationKind::Error, false)
    }

    /// Page-level failure (load, missing credential)
    pub fn sticky_error(&mut self, message: impl Into<String>) -> u64 {
        self.show(message.into(), NotificationKind::Error, true)
    }

    fn show(&mut self, message: String, kind: NotificationKind, sticky: bool) -> u64 {
        self.last_ticket += 1;
        self.current = Some(Notification {
            message,
            kind,
            ticket: self.last_ticket,
            sticky,
        });
        self.last_ticket
    }

    /// Ticket the auto-clear timer has to expire; `None` without a transient notice
    pub fn timer_ticket(&self) -> Option<u64> {
        self.current.as_ref().filter(|n| !n.sticky).map(|n| n.ticket)
    }

    /// Timer callback. Clears only the transient notification it was scheduled for.
    pub fn expire(&mut self, ticket: u64) -> bool {
        match &self.current {
            Some(n) if n.ticket == ticket && !n.sticky => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn clear_sticky(&mut self) {
        if self.current.as_ref().is_some_and(|n| n.sticky) {
            self.current = None;
        }
    }
}
