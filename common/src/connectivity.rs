//! Shared network-reachability state.
//!
//! A [`ConnectivityStore`] is created once per process and handed to whoever
//! needs it. [`ConnectivityStore::init`] reads the platform's current value
//! and registers the one writer path: the platform's change notification.
//! Readers either poll [`ConnectivityStore::read`] or [`subscribe`].
//!
//! Everything runs on the host's single UI thread, so the state lives in an
//! `Rc<RefCell<_>>` with no locking.
//!
//! [`subscribe`]: ConnectivityStore::subscribe

use crate::config::ConnectivityConfig;
use crate::error::ConnectivityError;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

/// Value reported while the platform primitive cannot be read. Assuming
/// online keeps the UI usable when the signal is unknown.
pub const OPTIMISTIC_DEFAULT: bool = true;

/// The host's network-status primitive.
pub trait ConnectivityPlatform {
    /// Current reachability, or `None` if the primitive is unavailable.
    fn current(&self) -> Option<bool>;

    /// Registers `on_change` to be called with every new value. Dropping or
    /// releasing the returned watch unregisters it.
    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<PlatformWatch, ConnectivityError>;
}

/// Registration with a [`ConnectivityPlatform`]. Unregisters on drop.
pub struct PlatformWatch {
    release: Option<Box<dyn FnOnce()>>,
}

impl PlatformWatch {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        PlatformWatch {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for PlatformWatch {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for PlatformWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformWatch")
            .field("active", &self.release.is_some())
            .finish()
    }
}

type Listener = Rc<dyn Fn(bool)>;

struct StoreState {
    online: bool,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
    watch: Option<PlatformWatch>,
    suppress_duplicates: bool,
}

/// Process-wide observable connectivity flag.
///
/// Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct ConnectivityStore {
    state: Rc<RefCell<StoreState>>,
}

impl ConnectivityStore {
    pub fn new() -> Self {
        Self::with_config(&ConnectivityConfig::default())
    }

    pub fn with_config(config: &ConnectivityConfig) -> Self {
        ConnectivityStore {
            state: Rc::new(RefCell::new(StoreState {
                online: OPTIMISTIC_DEFAULT,
                listeners: Vec::new(),
                next_listener_id: 0,
                watch: None,
                suppress_duplicates: config.suppress_duplicates,
            })),
        }
    }

    /// Connects the store to `platform`.
    ///
    /// Takes the platform's current value (or [`OPTIMISTIC_DEFAULT`]) and
    /// registers for change notifications. Calling `init` again replaces the
    /// previous registration.
    pub fn init<P: ConnectivityPlatform + ?Sized>(&self, platform: &P) {
        self.teardown();

        let initial = platform.current().unwrap_or_else(|| {
            warn!(
                "Connectivity primitive unavailable, assuming online={}",
                OPTIMISTIC_DEFAULT
            );
            OPTIMISTIC_DEFAULT
        });
        if initial != self.read() {
            self.publish(initial);
        }

        let store = Rc::downgrade(&self.state);
        let on_change = Box::new(move |online: bool| {
            if let Some(state) = Weak::upgrade(&store) {
                ConnectivityStore { state }.publish(online);
            }
        });

        match platform.watch(on_change) {
            Ok(watch) => {
                debug!("Connectivity store watching platform, online={}", initial);
                self.state.borrow_mut().watch = Some(watch);
            }
            Err(e) => {
                warn!("Connectivity changes will not be observed: {}", e);
            }
        }
    }

    /// Unregisters from the platform. The last value stays readable.
    pub fn teardown(&self) {
        let watch = self.state.borrow_mut().watch.take();
        if let Some(watch) = watch {
            debug!("Connectivity store releasing platform watch");
            watch.release();
        }
    }

    pub fn is_watching(&self) -> bool {
        self.state.borrow().watch.is_some()
    }

    pub fn read(&self) -> bool {
        self.state.borrow().online
    }

    /// Registers `listener` for every subsequent value.
    ///
    /// Listeners run in subscription order. A listener subscribed or
    /// unsubscribed while an event is being delivered takes effect from the
    /// next event.
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> Subscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    fn publish(&self, online: bool) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            if state.suppress_duplicates && state.online == online {
                return;
            }
            state.online = online;
            state
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };

        debug!(
            "Connectivity changed: online={} ({} listeners)",
            online,
            listeners.len()
        );
        for listener in listeners {
            listener(online);
        }
    }
}

impl Default for ConnectivityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConnectivityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ConnectivityStore")
            .field("online", &state.online)
            .field("listeners", &state.listeners.len())
            .field("watching", &state.watch.is_some())
            .finish()
    }
}

/// Handle returned by [`ConnectivityStore::subscribe`].
///
/// Dropping it does not unsubscribe; call [`Subscription::unsubscribe`].
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription {
    id: u64,
    state: Weak<RefCell<StoreState>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakePlatform {
        online: Option<bool>,
        callback: Rc<RefCell<Option<Box<dyn Fn(bool)>>>>,
        released: Rc<Cell<bool>>,
    }

    impl FakePlatform {
        fn reporting(online: bool) -> Self {
            FakePlatform {
                online: Some(online),
                ..Default::default()
            }
        }

        fn emit(&self, online: bool) {
            if let Some(callback) = self.callback.borrow().as_ref() {
                callback(online);
            }
        }
    }

    impl ConnectivityPlatform for FakePlatform {
        fn current(&self) -> Option<bool> {
            self.online
        }

        fn watch(
            &self,
            on_change: Box<dyn Fn(bool)>,
        ) -> Result<PlatformWatch, ConnectivityError> {
            *self.callback.borrow_mut() = Some(on_change);
            let callback = self.callback.clone();
            let released = self.released.clone();
            Ok(PlatformWatch::new(move || {
                callback.borrow_mut().take();
                released.set(true);
            }))
        }
    }

    struct MissingPlatform;

    impl ConnectivityPlatform for MissingPlatform {
        fn current(&self) -> Option<bool> {
            None
        }

        fn watch(
            &self,
            _on_change: Box<dyn Fn(bool)>,
        ) -> Result<PlatformWatch, ConnectivityError> {
            Err(ConnectivityError::Unavailable("no window".to_string()))
        }
    }

    fn recorder(store: &ConnectivityStore) -> (Rc<RefCell<Vec<bool>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = store.subscribe(move |online| sink.borrow_mut().push(online));
        (seen, subscription)
    }

    #[test]
    fn test_defaults_to_online_before_init() {
        let store = ConnectivityStore::new();
        assert!(store.read());
        assert!(!store.is_watching());
    }

    #[test]
    fn test_optimistic_default_when_platform_missing() {
        let store = ConnectivityStore::new();
        store.init(&MissingPlatform);
        assert!(store.read(), "unknown connectivity is reported as online");
        assert!(!store.is_watching());
    }

    #[test]
    fn test_init_reads_current_value() {
        let platform = FakePlatform::reporting(false);
        let store = ConnectivityStore::new();
        store.init(&platform);
        assert!(!store.read());
        assert!(store.is_watching());
    }

    #[test]
    fn test_listener_fires_once_per_event() {
        let platform = FakePlatform::reporting(false);
        let store = ConnectivityStore::new();
        store.init(&platform);
        let (seen, _subscription) = recorder(&store);

        platform.emit(true);
        assert!(store.read());
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn test_duplicates_delivered_by_default() {
        let platform = FakePlatform::reporting(true);
        let store = ConnectivityStore::new();
        store.init(&platform);
        let (seen, _subscription) = recorder(&store);

        platform.emit(true);
        platform.emit(true);
        assert_eq!(*seen.borrow(), vec![true, true]);
    }

    #[test]
    fn test_duplicates_suppressed_when_configured() {
        let platform = FakePlatform::reporting(true);
        let store = ConnectivityStore::with_config(&ConnectivityConfig {
            suppress_duplicates: true,
        });
        store.init(&platform);
        let (seen, _subscription) = recorder(&store);

        platform.emit(true);
        platform.emit(false);
        platform.emit(false);
        platform.emit(true);
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let platform = FakePlatform::reporting(true);
        let store = ConnectivityStore::new();
        store.init(&platform);

        let order = Rc::new(RefCell::new(Vec::new()));
        let subscriptions: Vec<_> = (0..3)
            .map(|n| {
                let order = order.clone();
                store.subscribe(move |_| order.borrow_mut().push(n))
            })
            .collect();

        platform.emit(false);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_eq!(subscriptions.len(), 3);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let platform = FakePlatform::reporting(true);
        let store = ConnectivityStore::new();
        store.init(&platform);
        let (seen, subscription) = recorder(&store);

        platform.emit(false);
        subscription.unsubscribe();
        platform.emit(true);

        assert_eq!(*seen.borrow(), vec![false]);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_subscribe_during_delivery() {
        let platform = FakePlatform::reporting(true);
        let store = ConnectivityStore::new();
        store.init(&platform);

        let late_calls = Rc::new(Cell::new(0));
        let inner_store = store.clone();
        let counter = late_calls.clone();
        let _outer = store.subscribe(move |_| {
            let counter = counter.clone();
            let _late = inner_store.subscribe(move |_| counter.set(counter.get() + 1));
        });

        platform.emit(false);
        assert_eq!(late_calls.get(), 0);
        platform.emit(true);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_teardown_releases_watch() {
        let platform = FakePlatform::reporting(true);
        let store = ConnectivityStore::new();
        store.init(&platform);
        let (seen, _subscription) = recorder(&store);

        store.teardown();
        assert!(platform.released.get());
        assert!(!store.is_watching());

        platform.emit(false);
        assert!(seen.borrow().is_empty());
        assert!(store.read(), "last value survives teardown");
    }

    #[test]
    fn test_reinit_replaces_registration() {
        let first = FakePlatform::reporting(true);
        let second = FakePlatform::reporting(false);
        let store = ConnectivityStore::new();
        let (seen, _subscription) = recorder(&store);

        store.init(&first);
        store.init(&second);
        assert!(first.released.get());
        assert!(!store.read());
        assert_eq!(*seen.borrow(), vec![false]);
    }
}
