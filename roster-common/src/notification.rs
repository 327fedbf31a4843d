//! Toast notifications
//!
//! The catalog raises [`Notification`]s through the [`Notifier`] trait and
//! never waits on them. The web app pushes them into a [`ToastQueue`] and
//! schedules removal of the ones that carry a timer.

/// Toast severity, drives icon and accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Warning,
    Info,
    Error,
}

/// Per-call changes to the default toast presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyOverrides {
    /// `Some(None)` disables auto-dismiss, `Some(Some(ms))` changes the delay
    pub timer_ms: Option<Option<u32>>,
    pub show_confirm_button: Option<bool>,
}

impl NotifyOverrides {
    /// No timer, explicit confirmation required
    pub fn persistent() -> Self {
        Self {
            timer_ms: Some(None),
            show_confirm_button: Some(true),
        }
    }
}

/// A single user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// Auto-dismiss delay; `None` keeps the toast until confirmed
    pub timer_ms: Option<u32>,
    pub show_confirm_button: bool,
}

impl Notification {
    /// Auto-dismissing toast with no confirmation button
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        timer_ms: u32,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            timer_ms: Some(timer_ms),
            show_confirm_button: false,
        }
    }

    pub fn with_overrides(mut self, overrides: NotifyOverrides) -> Self {
        if let Some(timer_ms) = overrides.timer_ms {
            self.timer_ms = timer_ms;
        }
        if let Some(show) = overrides.show_confirm_button {
            self.show_confirm_button = show;
        }
        self
    }

    /// True when the user has to acknowledge the toast to get rid of it
    pub fn is_persistent(&self) -> bool {
        self.timer_ms.is_none()
    }
}

/// Sink for user-facing notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Ordered stack of visible toasts, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast and return its id
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Remove a toast; false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_auto_dismiss_without_button() {
        let n = Notification::new("Added!", "Rick was added.", Severity::Success, 2000);
        assert_eq!(n.timer_ms, Some(2000));
        assert!(!n.show_confirm_button);
        assert!(!n.is_persistent());
    }

    #[test]
    fn test_persistent_override() {
        let n = Notification::new("Error", "boom", Severity::Error, 2000)
            .with_overrides(NotifyOverrides::persistent());
        assert_eq!(n.timer_ms, None);
        assert!(n.show_confirm_button);
        assert!(n.is_persistent());
    }

    #[test]
    fn test_empty_override_changes_nothing() {
        let n = Notification::new("t", "m", Severity::Info, 1500);
        assert_eq!(n.clone().with_overrides(NotifyOverrides::default()), n);
    }

    #[test]
    fn test_queue_dismiss() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notification::new("a", "", Severity::Info, 10));
        let second = queue.push(Notification::new("b", "", Severity::Info, 10));
        assert_ne!(first, second);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }
}
