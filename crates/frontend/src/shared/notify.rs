//! Toast notifications
//!
//! Success toasts close themselves after `[notifications] success_close_ms`;
//! warnings and errors stay until acknowledged.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::config::app_config;
use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn auto_closes(self) -> bool {
        matches!(self, NotificationKind::Success)
    }

    fn css_modifier(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast--success",
            NotificationKind::Warning => "toast--warning",
            NotificationKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, title: &str, text: &str) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            title: title.to_string(),
            text: text.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Handle stored in context by `App`
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    fn show(&self, kind: NotificationKind, title: &str, text: &str) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, title, text));
        if kind.auto_closes() {
            let queue = self.queue;
            Timeout::new(app_config().notifications.success_close_ms, move || {
                queue.try_update(|q| q.dismiss(id));
            })
            .forget();
        }
    }

    pub fn success(&self, title: &str, text: &str) {
        self.show(NotificationKind::Success, title, text);
    }

    pub fn warning(&self, title: &str, text: &str) {
        self.show(NotificationKind::Warning, title, text);
    }

    pub fn error(&self, title: &str, text: &str) {
        log::error!("{}: {}", title, text);
        self.show(NotificationKind::Error, title, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not found in context")
}

/// Renders the open notifications in the top-right corner
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifier.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=format!("toast {}", n.kind.css_modifier())>
                            <div class="toast__body">
                                <div class="toast__title">{n.title}</div>
                                <div class="toast__text">{n.text}</div>
                            </div>
                            <button class="toast__close" on:click=move |_| notifier.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(NotificationKind::Success, "Book", "saved");
        let second = queue.push(NotificationKind::Error, "Book", "failed");
        assert!(second > first);
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_that_notification() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(NotificationKind::Success, "a", "");
        queue.push(NotificationKind::Warning, "b", "");
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].title, "b");
        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_only_success_auto_closes() {
        assert!(NotificationKind::Success.auto_closes());
        assert!(!NotificationKind::Warning.auto_closes());
        assert!(!NotificationKind::Error.auto_closes());
    }
}
