//! "Please repaint" notifications from a chart to its hosts.
//!
//! Listeners are held weakly: subscribing never keeps a view alive. The
//! [`Subscription`] guard returned by [`InvalidationChannel::subscribe`]
//! removes the registration when dropped, so a host that owns its guard
//! next to its view unregisters exactly when it is torn down.

use indexmap::IndexMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Receiver of redraw requests.
pub trait InvalidationListener: Send + Sync {
    /// The chart needs to be drawn again.
    fn invalidate(&self);
}

impl<F> InvalidationListener for F
where
    F: Fn() + Send + Sync,
{
    fn invalidate(&self) {
        self();
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: IndexMap<u64, Weak<dyn InvalidationListener>>,
}

type SharedRegistry = Arc<Mutex<Registry>>;

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    // A listener panicking mid-notify leaves the map itself intact
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Weak fan-out of invalidation events.
#[derive(Default, Clone)]
pub struct InvalidationChannel {
    registry: SharedRegistry,
}

impl fmt::Debug for InvalidationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidationChannel")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl InvalidationChannel {
    /// Create an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` without taking ownership of it.
    #[must_use = "dropping the Subscription unregisters the listener"]
    pub fn subscribe(&self, listener: &Arc<dyn InvalidationListener>) -> Subscription {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Arc::downgrade(listener));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Notify every live listener once, in subscription order.
    ///
    /// Listeners that have been dropped are pruned. Returns the number of
    /// listeners notified.
    pub fn notify(&self) -> usize {
        let live: Vec<Arc<dyn InvalidationListener>> = {
            let mut registry = lock(&self.registry);
            registry.listeners.retain(|_, weak| weak.strong_count() > 0);
            registry.listeners.values().filter_map(Weak::upgrade).collect()
        };
        // Called outside the lock so listeners may subscribe or unsubscribe
        for listener in &live {
            listener.invalidate();
        }
        live.len()
    }

    /// Number of registrations whose listener is still alive.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.registry)
            .listeners
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Registration guard; unregisters on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Unregister now.
    pub fn unsubscribe(self) {}

    /// Whether the channel this subscription belongs to still exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.shift_remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, Arc<dyn InvalidationListener>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let listener: Arc<dyn InvalidationListener> = Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, listener)
    }

    #[test]
    fn test_notify_reaches_listener() {
        let channel = InvalidationChannel::new();
        let (count, listener) = counter();
        let _sub = channel.subscribe(&listener);
        assert_eq!(channel.notify(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_not_kept_alive() {
        let channel = InvalidationChannel::new();
        let (count, listener) = counter();
        let _sub = channel.subscribe(&listener);
        drop(listener);
        assert_eq!(channel.notify(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn test_subscription_drop_unregisters() {
        let channel = InvalidationChannel::new();
        let (count, listener) = counter();
        let sub = channel.subscribe(&listener);
        sub.unsubscribe();
        channel.notify();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscription_outlives_channel() {
        let channel = InvalidationChannel::new();
        let (_count, listener) = counter();
        let sub = channel.subscribe(&listener);
        assert!(sub.is_connected());
        drop(channel);
        assert!(!sub.is_connected());
        drop(sub);
    }

    #[test]
    fn test_multiple_listeners_in_order() {
        let channel = InvalidationChannel::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let make = |tag: u8| -> Arc<dyn InvalidationListener> {
            let order = Arc::clone(&order);
            Arc::new(move || order.lock().unwrap().push(tag))
        };
        let a = make(1);
        let b = make(2);
        let _sa = channel.subscribe(&a);
        let _sb = channel.subscribe(&b);
        assert_eq!(channel.notify(), 2);
        assert_eq!(*order.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_cloned_channel_shares_registry() {
        let channel = InvalidationChannel::new();
        let clone = channel.clone();
        let (count, listener) = counter();
        let _sub = channel.subscribe(&listener);
        clone.notify();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
