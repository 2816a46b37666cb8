//! Notification state management

use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::theme::palette;

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Info (dim) - short duration
    #[default]
    Info,
    /// Warning (yellow) - long duration, for things like an invalid config
    Warning,
}

impl NotificationType {
    fn duration(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(10),
        }
    }

    pub fn color(self) -> Color {
        match self {
            NotificationType::Info => palette::TEXT_MUTED,
            NotificationType::Warning => palette::WARNING,
        }
    }
}

/// A single notification with message, timing, and style
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
}

impl Notification {
    fn new(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            notification_type,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.notification_type.duration()
    }
}

/// Holds the currently displayed notification, if any
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_info(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Warning));
    }

    /// Currently visible notification, if one is live
    pub fn active(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| !n.is_expired())
    }

    /// Drop an expired notification; returns true if one was dropped
    pub fn expire(&mut self) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired()) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_notification_by_default() {
        let state = NotificationState::new();
        assert!(state.active().is_none());
    }

    #[test]
    fn test_show_warning_is_active() {
        let mut state = NotificationState::new();

        state.show_warning("Invalid config: something");

        let active = state.active().unwrap();
        assert_eq!(active.notification_type, NotificationType::Warning);
        assert!(active.message.contains("Invalid config"));
    }

    #[test]
    fn test_newer_notification_replaces_older() {
        let mut state = NotificationState::new();

        state.show_info("first");
        state.show_warning("second");

        assert_eq!(state.active().unwrap().message, "second");
    }

    #[test]
    fn test_dismiss_clears() {
        let mut state = NotificationState::new();
        state.show_warning("gone soon");

        state.dismiss();

        assert!(state.active().is_none());
    }

    #[test]
    fn test_expire_reports_nothing_while_fresh() {
        let mut state = NotificationState::new();
        state.show_warning("fresh");

        assert!(!state.expire());
        assert!(state.active().is_some());
    }
}
