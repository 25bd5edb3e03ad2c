//! Change notification registry.
//!
//! # Responsibility
//! - Let the surrounding application register change callbacks.
//! - Publish the affected route after a successful write.
//!
//! # Invariants
//! - Notification is a plain synchronous publish step; no subscriber
//!   management beyond registration, no delivery guarantees beyond the call.

use crate::provider::route::Route;
use log::debug;

/// Callback invoked with the route whose underlying data changed.
pub type ChangeListener = Box<dyn Fn(&Route)>;

/// Plain callback registry wired up by the application at construction time.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<ChangeListener>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Listeners are never removed.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Publishes a change for the given route to every listener.
    pub fn notify(&self, route: &Route) {
        debug!(
            "event=change_notify module=provider route={} listeners={}",
            route,
            self.listeners.len()
        );
        for listener in &self.listeners {
            listener(route);
        }
    }
}
