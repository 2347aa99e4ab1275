//! System color-scheme preference
//!
//! Models the OS-level "prefers dark" signal: a current value plus change
//! notifications. Subscriptions are scoped: dropping the returned
//! [`Subscription`] unsubscribes.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::debug;

/// Identifier of a registered listener
pub type SubscriptionId = u64;

/// Callback invoked with the new preference value
pub type PreferenceListener = Arc<dyn Fn(bool) + Send + Sync>;

/// Source of the system dark-mode preference
pub trait SystemPreference: Send + Sync {
    /// Current value of the preference
    fn prefers_dark(&self) -> bool;

    /// Register a listener for changes
    fn add_listener(&self, listener: PreferenceListener) -> SubscriptionId;

    /// Remove a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: SubscriptionId);
}

/// Subscribe to `source`, returning a guard that unsubscribes on drop
pub fn subscribe(
    source: &Arc<dyn SystemPreference>,
    listener: impl Fn(bool) + Send + Sync + 'static,
) -> Subscription {
    let id = source.add_listener(Arc::new(listener));
    Subscription {
        source: Arc::downgrade(source),
        id,
    }
}

/// Live listener registration
pub struct Subscription {
    source: Weak<dyn SystemPreference>,
    id: SubscriptionId,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source.remove_listener(self.id);
            debug!(id = self.id, "Released system preference subscription");
        }
    }
}

#[derive(Default)]
struct ManualState {
    prefers_dark: bool,
    next_id: SubscriptionId,
    listeners: Vec<(SubscriptionId, PreferenceListener)>,
}

/// In-process preference signal whose value is set explicitly
#[derive(Default)]
pub struct ManualPreference {
    state: Mutex<ManualState>,
}

impl ManualPreference {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            state: Mutex::new(ManualState {
                prefers_dark,
                ..Default::default()
            }),
        }
    }

    /// Change the preference, notifying listeners if the value changed
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let listeners: Vec<PreferenceListener> = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.prefers_dark == prefers_dark {
                return;
            }
            state.prefers_dark = prefers_dark;
            state.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        debug!(prefers_dark, listeners = listeners.len(), "System preference changed");

        // Listeners may query the source, so the lock is released first
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

impl fmt::Debug for ManualPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ManualPreference")
            .field("prefers_dark", &state.prefers_dark)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl SystemPreference for ManualPreference {
    fn prefers_dark(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .prefers_dark
    }

    fn add_listener(&self, listener: PreferenceListener) -> SubscriptionId {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, listener));
        id
    }

    fn remove_listener(&self, id: SubscriptionId) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .retain(|(existing, _)| *existing != id);
    }
}
