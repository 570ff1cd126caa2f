//! Persisted session slot surviving page reloads.
//!
//! DESIGN
//! ======
//! One serialized record under a fixed key. Malformed or missing data always
//! loads as "no session" — a corrupt slot must never take the app down, it
//! just lands the visitor in the anonymous state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Mutex;

use super::user::User;

/// Fixed key for the serialized session record in per-origin storage.
pub const STORAGE_KEY: &str = "promptLibraryUser";

/// Durable single-slot store for the current session record.
pub trait SessionStore {
    /// Previously stored user, or `None` when absent or malformed.
    fn load(&self) -> Option<User>;
    /// Overwrite the stored record unconditionally.
    fn save(&self, user: &User);
    /// Remove the stored record.
    fn clear(&self);
}

/// `localStorage`-backed store. All accesses are best-effort and no-op off
/// the browser (SSR renders the loading state and hydration takes over).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn load(&self) -> Option<User> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
            serde_json::from_str(&raw).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, user: &User) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let Ok(raw) = serde_json::to_string(user) else {
                return;
            };
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-memory store holding the serialized record behind a mutex. Used by
/// tests and headless callers; goes through the same serde round-trip as the
/// browser store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Replace the raw serialized slot, bypassing serialization. Lets tests
    /// plant malformed data.
    pub fn set_raw(&self, raw: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(raw.to_owned());
        }
    }

    /// The raw serialized record, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<User> {
        let slot = self.slot.lock().ok()?;
        let raw = slot.as_ref()?;
        serde_json::from_str(raw).ok()
    }

    fn save(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            if let Ok(mut slot) = self.slot.lock() {
                *slot = Some(raw);
            }
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
