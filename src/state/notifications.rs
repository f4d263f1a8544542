use uuid::Uuid;

use crate::constants::NOTIFICATION_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Toasts currently on screen, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
}

impl NotificationCenter {
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            severity,
        };
        let id = notification.id;
        self.entries.insert(0, notification);
        self.entries.truncate(NOTIFICATION_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_respects_limit() {
        let mut center = NotificationCenter::default();
        for i in 0..(NOTIFICATION_LIMIT + 2) {
            center.push(format!("title {i}"), "", Severity::Normal);
        }
        assert_eq!(center.entries().len(), NOTIFICATION_LIMIT);
        assert_eq!(
            center.entries()[0].title,
            format!("title {}", NOTIFICATION_LIMIT + 1)
        );
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut center = NotificationCenter::default();
        let id = center.push("Generation failed", "rate limited", Severity::Destructive);
        assert_eq!(center.entries()[0].severity, Severity::Destructive);
        center.dismiss(Uuid::new_v4());
        assert_eq!(center.entries().len(), 1);
        center.dismiss(id);
        assert!(center.entries().is_empty());
    }
}
