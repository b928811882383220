//! Notification system for user-visible feedback
//!
//! Toasts expire on their own. Blocking notifications stay until the user
//! dismisses them and take over the keyboard while shown.

use std::time::{Duration, Instant};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: usize,
    pub timestamp: Instant,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub blocking: bool,
    pub auto_dismiss_after: Option<Duration>,
}

impl Notification {
    fn expired(&self, now: Instant) -> bool {
        match self.auto_dismiss_after {
            Some(duration) => now.duration_since(self.timestamp) >= duration,
            None => false,
        }
    }
}

pub struct NotificationManager {
    notifications: Vec<Notification>,
    next_id: usize,
    max_notifications: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 0,
            max_notifications: 50,
        }
    }

    /// Add an error that stays until dismissed
    pub fn blocking_error(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Error, title.into(), message.into(), true)
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Success, title.into(), message.into(), false)
    }

    fn push(
        &mut self,
        level: NotificationLevel,
        title: String,
        message: String,
        blocking: bool,
    ) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        self.notifications.push(Notification {
            id,
            timestamp: Instant::now(),
            level,
            title,
            message,
            blocking,
            auto_dismiss_after: if blocking { None } else { Some(TOAST_LIFETIME) },
        });

        // Keep only recent notifications
        if self.notifications.len() > self.max_notifications {
            self.notifications.remove(0);
        }

        id
    }

    pub fn dismiss(&mut self, id: usize) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Oldest blocking notification still waiting for the user
    pub fn blocking(&self) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.blocking)
    }

    /// Dismiss the oldest blocking notification. Returns false if none was shown.
    pub fn dismiss_blocking(&mut self) -> bool {
        match self.blocking().map(|n| n.id) {
            Some(id) => {
                self.dismiss(id);
                true
            }
            None => false,
        }
    }

    /// Non-blocking notifications that have not expired yet
    pub fn get_active(&self) -> Vec<&Notification> {
        let now = Instant::now();
        self.notifications
            .iter()
            .filter(|n| !n.blocking && !n.expired(now))
            .collect()
    }

    pub fn cleanup_expired(&mut self) {
        let now = Instant::now();
        self.notifications.retain(|n| !n.expired(now));
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.notifications.iter().filter(|n| n.level == level).count()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
