use std::fmt::Debug;

use foundation::time::Time;
use tracing::debug;

/// How long the "copied" confirmation stays visible (seconds).
pub const COPIED_FEEDBACK_S: f64 = 2.0;
/// Simulated delay before the contact form hands off to the mail client.
pub const SUBMIT_DELAY_S: f64 = 1.0;

/// A transient UI flag that turns itself off after a fixed timeout.
///
/// Only one key is active at a time; triggering another key replaces it.
/// There is no cancellation of an individual timeout. Once the owning view is
/// detached, late triggers and expiries are dropped instead of touching state
/// that is no longer shown.
#[derive(Debug, Clone)]
pub struct FeedbackFlag<K> {
    active: Option<(K, Time)>,
    attached: bool,
}

impl<K> Default for FeedbackFlag<K> {
    fn default() -> Self {
        Self {
            active: None,
            attached: true,
        }
    }
}

impl<K: Clone + PartialEq + Debug> FeedbackFlag<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag for `key` until `now + ttl_s`.
    ///
    /// Returns `false` if the flag is detached.
    pub fn trigger(&mut self, key: K, now: Time, ttl_s: f64) -> bool {
        if !self.attached {
            debug!(?key, "feedback trigger after detach ignored");
            return false;
        }
        self.active = Some((key, now.after(ttl_s)));
        true
    }

    /// Clears the flag if its deadline has passed, returning the expired key.
    pub fn expire(&mut self, now: Time) -> Option<K> {
        if !self.attached {
            return None;
        }
        let due = matches!(&self.active, Some((_, deadline)) if now >= *deadline);
        if !due {
            return None;
        }
        self.active.take().map(|(k, _)| k)
    }

    pub fn current(&self) -> Option<&K> {
        self.active.as_ref().map(|(k, _)| k)
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.current() == Some(key)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Detaches the flag from its view; pending timeouts are dropped.
    pub fn detach(&mut self) {
        if let Some((key, _)) = self.active.take() {
            debug!(?key, "pending feedback dropped on detach");
        }
        self.attached = false;
    }
}
