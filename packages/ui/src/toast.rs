//! Transient notifications stacked in the corner of the screen.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays up unless clicked away.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// An error message on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            message: message.to_string(),
        });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Error-level, user-visible messages.
pub trait Notifier {
    fn notify_error(&mut self, message: &str);
}

impl Notifier for ToastQueue {
    fn notify_error(&mut self, message: &str) {
        self.push(message);
    }
}

/// Handle to the app-wide toast queue, from [`use_toasts`].
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts(Signal<ToastQueue>);

impl Toasts {
    pub fn dismiss(&mut self, id: u64) {
        self.0.write().dismiss(id);
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.0.read().entries().to_vec()
    }
}

impl Notifier for Toasts {
    fn notify_error(&mut self, message: &str) {
        self.0.write().push(message);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Owns the toast queue and renders it above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    let toasts = use_context_provider(|| Toasts(queue));

    rsx! {
        document::Stylesheet { href: crate::TOAST_CSS }
        {children}
        div {
            class: "toast-stack",
            for toast in toasts.entries() {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    use_future(move || async move {
        sleep(TOAST_TTL).await;
        toasts.dismiss(id);
    });

    rsx! {
        div {
            class: "toast toast--error",
            role: "alert",
            onclick: move |_| toasts.dismiss(id),
            "{toast.message}"
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push("a");
        let b = queue.push("b");
        assert!(b > a);
        assert_eq!(queue.entries().len(), 2);
        assert_eq!(queue.entries()[1].message, "b");
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push("a");
        let b = queue.push("b");

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].id, b);
    }

    #[test]
    fn test_notifier_pushes_error_toast() {
        let mut queue = ToastQueue::default();
        queue.notify_error("Passwords do not match");
        assert_eq!(
            queue.entries(),
            [Toast {
                id: 0,
                message: "Passwords do not match".to_string(),
            }]
        );
    }
}
