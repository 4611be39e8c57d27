//! The notification reporter: a single slot for a transient message.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "⚠",
        }
    }
}

/// Ids only ever increase, so a timer holding an old id can tell that its
/// notification has since been replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
}

/// Displays at most one notification; showing a new one drops the current one
/// on the spot. Expiry is driven from outside (see `Page`), by id.
#[derive(Debug, Default)]
pub struct Notifier {
    shown: u64,
    active: Option<Notification>,
}

impl Notifier {
    /// Replace whatever is displayed. The returned id is what `expire` must be
    /// called with once the notification's lifetime is over.
    pub fn show(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> NotificationId {
        self.shown += 1;
        let id = NotificationId(self.shown);
        let message = message.into();

        if let Some(old) = &self.active {
            tracing::debug!(old = ?old.id, new = ?id, "superseding notification");
        }
        tracing::info!(kind = kind.as_str(), %message, "showing notification");

        self.active = Some(Notification { id, kind, message });
        id
    }

    /// Remove the notification `id`, if it is still the one on display.
    /// Returns whether anything was removed.
    pub fn expire(
        &mut self,
        id: NotificationId,
    ) -> bool {
        match &self.active {
            Some(n) if n.id == id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> Option<&Notification> { self.active.as_ref() }

    /// Total number of notifications shown so far
    pub fn shown(&self) -> u64 { self.shown }
}
