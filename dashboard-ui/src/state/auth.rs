//! Auth Context
//!
//! Reactive mirror of the auth store, provided to every component.

use evadash::{AuthError, AuthModule, AuthState};
use leptos::*;

use super::toast::ErrorToast;

/// Sign-in attempts kept for the dashboard chart
const MAX_ATTEMPTS: usize = 50;

/// One run of the login action, as seen from the browser
#[derive(Debug, Clone, PartialEq)]
pub struct LoginAttempt {
    /// Completion time (ms since epoch)
    pub at_ms: i64,
    /// Round trip through token and profile calls
    pub duration_ms: i64,
    pub succeeded: bool,
}

/// Auth context shared by the component tree
#[derive(Clone)]
pub struct AuthContext {
    module: AuthModule,
    /// Last snapshot of the auth store
    pub state: RwSignal<AuthState>,
    /// A login is in flight
    pub pending: RwSignal<bool>,
    /// When the current user finished signing in (ms since epoch)
    pub signed_in_at: RwSignal<Option<i64>>,
    /// Recent login attempts, oldest first
    pub attempts: RwSignal<Vec<LoginAttempt>>,
    /// Error message to display
    pub error: ErrorToast,
}

/// Provide the auth context to the component tree
pub fn provide_auth_context(module: AuthModule) {
    let context = AuthContext {
        state: create_rw_signal(module.store().snapshot()),
        module,
        pending: create_rw_signal(false),
        signed_in_at: create_rw_signal(None),
        attempts: create_rw_signal(Vec::new()),
        error: ErrorToast::new(),
    };

    provide_context(context);
}

impl AuthContext {
    /// Run the login action and refresh the mirror, whatever the outcome
    pub async fn login(&self, email: String, password: String) -> Result<(), AuthError> {
        self.pending.set(true);
        self.clear_error();
        let started = chrono::Utc::now().timestamp_millis();

        let result = self.module.login(&email, &password).await.map(|_| ());

        // A failed login may still have stored a token
        self.sync();
        let finished = chrono::Utc::now().timestamp_millis();
        if result.is_ok() {
            self.signed_in_at.set(Some(finished));
        }
        self.attempts.update(|attempts| {
            record_attempt(
                attempts,
                LoginAttempt {
                    at_ms: finished,
                    duration_ms: finished - started,
                    succeeded: result.is_ok(),
                },
            )
        });
        self.pending.set(false);

        result
    }

    /// Copy the store into the reactive snapshot
    pub fn sync(&self) {
        self.state.set(self.module.store().snapshot());
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.show(message);
    }

    pub fn clear_error(&self) {
        self.error.clear();
    }
}

fn record_attempt(attempts: &mut Vec<LoginAttempt>, attempt: LoginAttempt) {
    attempts.push(attempt);
    if attempts.len() > MAX_ATTEMPTS {
        let excess = attempts.len() - MAX_ATTEMPTS;
        attempts.drain(..excess);
    }
}
