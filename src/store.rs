//! Toast Store
//!
//! Notifications live in a `reactive_stores` store provided via context.
//! Each toast removes itself after the configured lifetime.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Stack of visible toasts, oldest first
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

pub type ToastStore = Store<ToastState>;

pub fn use_toast_store() -> ToastStore {
    expect_context::<ToastStore>()
}

/// Show a toast for `millis` milliseconds
pub fn notify(store: ToastStore, kind: ToastKind, message: impl Into<String>, millis: u32) {
    let id = store_push(store, kind, message);
    Timeout::new(millis, move || store_dismiss(store, id)).forget();
}

/// Append a toast without scheduling its removal; returns its id
pub fn store_push(store: ToastStore, kind: ToastKind, message: impl Into<String>) -> u64 {
    let message = message.into();
    match kind {
        ToastKind::Error => tracing::warn!(%message, "toast"),
        ToastKind::Success => tracing::info!(%message, "toast"),
    }
    let id = store.next_id().get_untracked();
    store.next_id().set(id + 1);
    store.toasts().write().push(Toast { id, kind, message });
    id
}

/// Remove a toast by id
pub fn store_dismiss(store: ToastStore, id: u64) {
    store.toasts().write().retain(|t| t.id != id);
}
