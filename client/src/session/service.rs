//! Session service: the sign-in/up/out operations pages invoke.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at the app root and provided via context together with
//! its `RwSignal<AuthState>`. Route guards read the signal; forms call the
//! async operations. Reading the context outside the provided scope fails
//! fast through `expect_context`.
//!
//! DESIGN
//! ======
//! Each operation simulates a backend round trip, then decides locally.
//! Mutual exclusion is an explicit single-slot claim inside the service, not
//! a disabled submit button: overlapping calls get `AuthError::Busy`. A drop
//! guard resets the loading flag on every exit path, so validation failures
//! and thrown errors can never strand the UI in the loading state.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::auth::AuthState;

use super::error::AuthError;
use super::store::SessionStore;
use super::user::{ADMIN_EMAIL, ADMIN_PASSWORD, SocialProvider, User};

/// Simulated backend latency for credential operations, in milliseconds.
const CREDENTIAL_LATENCY_MS: u64 = 1_000;
/// Simulated OAuth handshake latency, in milliseconds.
const SOCIAL_LATENCY_MS: u64 = 1_500;

/// Cooperative cancellation flag for in-flight operations.
///
/// Pages cancel from `on_cleanup` so a form torn down mid-request never
/// applies a late result.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

type SocialFailureHook = dyn Fn(SocialProvider) -> Option<String> + Send + Sync;

/// Session operations over a [`SessionStore`], exposing identity state as a
/// [`RwSignal<AuthState>`].
#[derive(Clone)]
pub struct SessionService {
    auth: RwSignal<AuthState>,
    store: Arc<dyn SessionStore + Send + Sync>,
    in_flight: Arc<AtomicBool>,
    social_failure: Option<Arc<SocialFailureHook>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
            store,
            in_flight: Arc::new(AtomicBool::new(false)),
            social_failure: None,
        }
    }

    /// Install a hook that can fail social sign-in. There is no real
    /// transport, so this is the only way to exercise that failure path.
    pub fn with_social_failure(
        mut self,
        hook: impl Fn(SocialProvider) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.social_failure = Some(Arc::new(hook));
        self
    }

    /// Identity + loading signal read by route guards and user-aware views.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.auth
    }

    /// One-time transition out of the loading state using the persisted
    /// record. Malformed storage lands in the anonymous state.
    pub fn restore(&self) {
        let stored = self.store.load();
        self.auth.update(|state| {
            state.user = stored;
            state.loading = false;
        });
    }

    /// Sign in with an email/password pair.
    ///
    /// The reserved admin pair yields the fixed admin identity; any other
    /// non-empty pair yields a regular user named after the email local
    /// part. An empty field reports `Ok(false)` without touching state.
    /// `_admin_attempt` mirrors the sign-in form's admin tab and is
    /// deliberately ignored for role assignment: the reserved pair is the
    /// only route to the admin role.
    ///
    /// # Errors
    ///
    /// [`AuthError::Busy`] when another operation holds the in-flight slot,
    /// [`AuthError::Cancelled`] when `cancel` fired mid-request.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        _admin_attempt: bool,
        cancel: &CancelToken,
    ) -> Result<bool, AuthError> {
        let _busy = self.begin()?;
        simulated_latency(CREDENTIAL_LATENCY_MS).await;
        if cancel.is_cancelled() {
            return Err(AuthError::Cancelled);
        }

        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            self.commit(User::admin());
            return Ok(true);
        }
        if email.is_empty() || password.is_empty() {
            return Ok(false);
        }
        self.commit(User::from_email(email));
        Ok(true)
    }

    /// Create an account. The reserved admin address is always rejected as a
    /// duplicate, before any field validation.
    ///
    /// # Errors
    ///
    /// [`AuthError::EmailInUse`] for the reserved address, plus the same
    /// `Busy`/`Cancelled` conditions as [`Self::sign_in`].
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        cancel: &CancelToken,
    ) -> Result<bool, AuthError> {
        let _busy = self.begin()?;
        simulated_latency(CREDENTIAL_LATENCY_MS).await;
        if cancel.is_cancelled() {
            return Err(AuthError::Cancelled);
        }

        if email == ADMIN_EMAIL {
            return Err(AuthError::EmailInUse);
        }
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Ok(false);
        }
        self.commit(User::from_signup(name, email));
        Ok(true)
    }

    /// Sign in through a social provider. Always succeeds unless the
    /// injected failure hook fires.
    ///
    /// # Errors
    ///
    /// [`AuthError::Provider`] from the failure hook, plus `Busy`/`Cancelled`.
    pub async fn sign_in_with_social(
        &self,
        provider: SocialProvider,
        cancel: &CancelToken,
    ) -> Result<bool, AuthError> {
        let _busy = self.begin()?;
        simulated_latency(SOCIAL_LATENCY_MS).await;
        if cancel.is_cancelled() {
            return Err(AuthError::Cancelled);
        }

        if let Some(hook) = self.social_failure.as_ref() {
            if let Some(message) = hook(provider) {
                return Err(AuthError::Provider(message));
            }
        }
        self.commit(User::from_social(provider));
        Ok(true)
    }

    /// Clear the in-memory identity and the persisted record. Idempotent.
    pub fn sign_out(&self) {
        self.store.clear();
        self.auth.update(|state| state.user = None);
    }

    fn begin(&self) -> Result<OpGuard, AuthError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AuthError::Busy);
        }
        self.auth.update(|state| state.loading = true);
        Ok(OpGuard {
            auth: self.auth,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    fn commit(&self, user: User) {
        self.auth.update(|state| state.user = Some(user.clone()));
        self.store.save(&user);
    }
}

/// Claim on the single in-flight slot. Dropping it releases the slot and
/// resets the loading flag, on success, validation failure, error, and
/// cancellation alike.
struct OpGuard {
    auth: RwSignal<AuthState>,
    in_flight: Arc<AtomicBool>,
}

impl Drop for OpGuard {
    fn drop(&mut self) {
        self.auth.update(|state| state.loading = false);
        self.in_flight.store(false, Ordering::Release);
    }
}

/// Stand-in for a backend round trip. Browser-only; native callers (SSR,
/// tests) resolve immediately.
#[allow(clippy::unused_async)]
pub(crate) async fn simulated_latency(ms: u64) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
