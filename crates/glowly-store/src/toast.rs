//! Bounded, self-expiring notification queue.
//!
//! Each toast schedules its own one-shot removal on the ambient tokio
//! runtime. Manual dismissal does not cancel that timer; the late removal
//! finds nothing and does nothing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(3500);
pub const DEFAULT_TOAST_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Wishlist,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Millisecond timestamp plus a random suffix, e.g. `"1760781234567-9f3a0c1e"`.
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

/// Handle to a shared toast queue. Clones observe the same queue.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL, DEFAULT_TOAST_CAPACITY)
    }
}

impl ToastQueue {
    /// Creates an empty queue. A `capacity` of zero is raised to one.
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.max(1)))),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Appends a toast, evicts the oldest beyond capacity, and schedules its
    /// expiry. Returns the new toast's id.
    ///
    /// Expiry needs a tokio runtime; called outside one, the toast stays until
    /// it is evicted or dismissed.
    pub fn show_toast(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        subtext: Option<String>,
    ) -> String {
        let id = next_toast_id();
        let toast = Toast {
            id: id.clone(),
            message: message.into(),
            kind,
            subtext,
        };

        {
            let mut toasts = lock(&self.toasts);
            toasts.push_back(toast);
            while toasts.len() > self.capacity {
                toasts.pop_front();
            }
        }

        self.schedule_expiry(id.clone());
        id
    }

    /// Dismisses a toast. Returns `false` if it was already gone.
    pub fn remove_toast(&self, id: &str) -> bool {
        remove_by_id(&self.toasts, id)
    }

    /// Current toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        lock(&self.toasts).iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.toasts).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.toasts).is_empty()
    }

    fn schedule_expiry(&self, id: String) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(toast_id = %id, "no async runtime, toast will not auto-expire");
            return;
        };

        let toasts = Arc::clone(&self.toasts);
        let ttl = self.ttl;
        handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            if remove_by_id(&toasts, &id) {
                tracing::trace!(toast_id = %id, "toast expired");
            }
        });
    }
}

fn lock(toasts: &Mutex<VecDeque<Toast>>) -> MutexGuard<'_, VecDeque<Toast>> {
    toasts.lock().unwrap_or_else(PoisonError::into_inner)
}

fn remove_by_id(toasts: &Mutex<VecDeque<Toast>>, id: &str) -> bool {
    let mut toasts = lock(toasts);
    let before = toasts.len();
    toasts.retain(|t| t.id != id);
    toasts.len() != before
}

fn next_toast_id() -> String {
    format!(
        "{}-{:08x}",
        Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}
