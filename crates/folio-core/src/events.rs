//! Change notification for collection writes.
//!
//! Every successful save raises one payload-less signal. Observers register
//! per store and are expected to re-read whole collections when signalled.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::broadcast;

const BUFFER_CAPACITY: usize = 16;

type Observer = Arc<dyn Fn() + Send + Sync>;

struct NotifierInner {
    observers: Mutex<Vec<(u64, Observer)>>,
    next_id: AtomicU64,
    sender: broadcast::Sender<()>,
}

/// Observer registry shared by every handle to the same store.
#[derive(Clone)]
pub struct ChangeNotifier {
    inner: Arc<NotifierInner>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (sender, _receiver) = broadcast::channel(BUFFER_CAPACITY);
        Self {
            inner: Arc::new(NotifierInner {
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                sender,
            }),
        }
    }

    /// Register `observer`. It stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.observers.lock().push((id, Arc::new(observer)));
        Subscription {
            id,
            notifier: Arc::downgrade(&self.inner),
        }
    }

    /// Subscribe as an async consumer. Signals sent while the receiver lags
    /// past the buffer are dropped.
    pub fn subscribe_channel(&self) -> broadcast::Receiver<()> {
        self.inner.sender.subscribe()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.lock().len()
    }

    /// Signal every registered observer, in registration order.
    pub(crate) fn notify(&self) {
        // Snapshot first so observers can re-enter the store or (un)subscribe.
        let observers: Vec<Observer> = self
            .inner
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();

        for observer in observers {
            observer();
        }

        let _ = self.inner.sender.send(());
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Cancellation handle returned by [`ChangeNotifier::subscribe`].
#[must_use = "dropping a Subscription unsubscribes the observer"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    notifier: Weak<NotifierInner>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.notifier.upgrade() {
            inner.observers.lock().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_notify_reaches_every_observer() {
        let notifier = ChangeNotifier::new();
        let (first, observer_a) = counter();
        let (second, observer_b) = counter();
        let _a = notifier.subscribe(observer_a);
        let _b = notifier.subscribe(observer_b);

        notifier.notify();

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let notifier = ChangeNotifier::new();
        let (count, observer) = counter();
        let subscription = notifier.subscribe(observer);
        assert_eq!(notifier.observer_count(), 1);

        subscription.unsubscribe();
        notifier.notify();

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.observer_count(), 0);
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let notifier = ChangeNotifier::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let log = order.clone();
        let _first = notifier.subscribe(move || log.lock().push("first"));
        let log = order.clone();
        let _second = notifier.subscribe(move || log.lock().push("second"));

        notifier.notify();

        assert_eq!(*order.lock(), vec!["first", "second"]);
    }

    #[test]
    fn test_observer_may_subscribe_during_notify() {
        let notifier = ChangeNotifier::new();
        let spawned = Arc::new(Mutex::new(Vec::new()));

        let inner_notifier = notifier.clone();
        let sink = spawned.clone();
        let _outer = notifier.subscribe(move || {
            sink.lock().push(inner_notifier.subscribe(|| {}));
        });

        notifier.notify();

        assert_eq!(spawned.lock().len(), 1);
        assert_eq!(notifier.observer_count(), 2);
    }

    #[test]
    fn test_subscription_outliving_notifier() {
        let notifier = ChangeNotifier::new();
        let subscription = notifier.subscribe(|| {});
        drop(notifier);
        drop(subscription);
    }

    #[tokio::test]
    async fn test_channel_receives_signal() {
        let notifier = ChangeNotifier::new();
        let mut receiver = notifier.subscribe_channel();

        notifier.notify();

        assert!(receiver.recv().await.is_ok());
        assert!(receiver.try_recv().is_err());
    }
}
