//! Transient notification queue
//!
//! `ToastQueue` is the plain data structure; `Toasts` is the copyable handle
//! apps put into context so any view callback can surface a message.

use dioxus::prelude::*;
use shop_common::Notification;

/// How long a toast stays up before dismissing itself
pub const TOAST_DISMISS_MS: u64 = 3000;

/// A queued notification with a stable id for keyed rendering
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Ordered toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle to the app-wide toast queue
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    /// Queue a notification for display
    pub fn show(&self, notification: Notification) -> u64 {
        let mut queue = self.queue;
        let id = queue.write().push(notification);
        tracing::debug!(id, "Queued toast");
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    /// Snapshot of the current toasts (subscribes the caller)
    pub fn current(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }
}

/// Create the toast queue and provide it to descendants
pub fn use_toasts_provider() -> Toasts {
    let queue = use_signal(ToastQueue::new);
    use_context_provider(|| Toasts { queue })
}

/// Get the toast queue provided by an ancestor
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
