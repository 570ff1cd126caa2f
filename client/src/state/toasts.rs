//! Dismissible notification state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reports outcomes (copied prompt, failed sign-in, moderation
//! actions) through the shared toast stack rendered at the app root.
//! Auto-dismissal is a browser-only timer; the struct itself has no notion
//! of time.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays up before auto-dismissing, in milliseconds.
#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u64 = 4_000;

/// Toast severity, mapped to presentation classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    Destructive,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// The visible toast stack, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
        });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored (it may have been
    /// dismissed by hand before its timer fired).
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Push a toast onto the shared stack and schedule its auto-dismissal
/// (browser only).
pub fn notify(toasts: RwSignal<ToastState>, title: &str, description: &str, variant: ToastVariant) {
    let id = {
        let mut assigned = 0;
        toasts.update(|state| assigned = state.push(title, description, variant));
        assigned
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
