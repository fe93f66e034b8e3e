//! Error Toast State
//!
//! The message shown in the toast, and the timer that hides it again.

use leptos::*;

/// How long an error toast stays up
const ERROR_TOAST_MS: u32 = 5000;

/// Currently displayed error, if any.
///
/// Every `show` bumps a generation counter; a timer only clears the message
/// it was started for, so a stale timer never hides a newer error.
#[derive(Clone, Copy)]
pub struct ErrorToast {
    pub message: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl ErrorToast {
    pub fn new() -> Self {
        Self {
            message: create_rw_signal(None),
            generation: store_value(0),
        }
    }

    /// Show a message and hide it after the toast timeout
    pub fn show(&self, message: &str) {
        let generation = self.post(message);

        let toast = *self;
        gloo_timers::callback::Timeout::new(ERROR_TOAST_MS, move || toast.expire(generation))
            .forget();
    }

    pub fn clear(&self) {
        self.generation.update_value(|g| *g += 1);
        self.message.set(None);
    }

    fn post(&self, message: &str) -> u64 {
        self.generation.update_value(|g| *g += 1);
        self.message.set(Some(message.to_string()));
        self.generation.get_value()
    }

    fn expire(&self, generation: u64) {
        if self.generation.get_value() == generation {
            self.message.set(None);
        }
    }
}

impl Default for ErrorToast {
    fn default() -> Self {
        Self::new()
    }
}
