//! Browser side of the connectivity store.
//!
//! `BrowserConnectivity` adapts `navigator.onLine` and the window
//! `online`/`offline` events to [`ConnectivityPlatform`]. The store itself is
//! created once by the root component and shared through context.

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use shellkit_core::connectivity::{ConnectivityPlatform, ConnectivityStore, PlatformWatch, Subscription};
use shellkit_core::ConnectivityError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const ONLINE_EVENT: &str = "online";
const OFFLINE_EVENT: &str = "offline";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConnectivity;

impl ConnectivityPlatform for BrowserConnectivity {
    fn current(&self) -> Option<bool> {
        web_sys::window().map(|window| window.navigator().on_line())
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<PlatformWatch, ConnectivityError> {
        let window = web_sys::window()
            .ok_or_else(|| ConnectivityError::Unavailable("no window object".to_string()))?;
        let on_change: Rc<dyn Fn(bool)> = Rc::from(on_change);

        let online = {
            let on_change = on_change.clone();
            Closure::<dyn Fn()>::new(move || on_change(true))
        };
        let offline = Closure::<dyn Fn()>::new(move || on_change(false));

        window
            .add_event_listener_with_callback(ONLINE_EVENT, online.as_ref().unchecked_ref())
            .map_err(|e| ConnectivityError::RegistrationFailed(format!("{:?}", e)))?;
        if let Err(e) = window
            .add_event_listener_with_callback(OFFLINE_EVENT, offline.as_ref().unchecked_ref())
        {
            let _ = window
                .remove_event_listener_with_callback(ONLINE_EVENT, online.as_ref().unchecked_ref());
            return Err(ConnectivityError::RegistrationFailed(format!("{:?}", e)));
        }
        info!("Listening for browser online/offline events");

        Ok(PlatformWatch::new(move || {
            let _ = window
                .remove_event_listener_with_callback(ONLINE_EVENT, online.as_ref().unchecked_ref());
            let _ = window
                .remove_event_listener_with_callback(OFFLINE_EVENT, offline.as_ref().unchecked_ref());
            debug!("Removed browser online/offline listeners");
        }))
    }
}

/// Creates the process-wide store, connects it to the browser and provides
/// it to descendants. Call once, from the root component.
pub fn use_connectivity_provider(store: impl FnOnce() -> ConnectivityStore) -> ConnectivityStore {
    let store = use_hook(move || {
        let store = store();
        store.init(&BrowserConnectivity);
        store
    });
    use_context_provider({
        let store = store.clone();
        move || store
    });
    use_drop({
        let store = store.clone();
        move || store.teardown()
    });
    store
}

/// Current connectivity as a signal, kept in sync with the shared store.
pub fn use_online() -> Signal<bool> {
    let store = use_context::<ConnectivityStore>();
    let online = use_signal(|| store.read());

    let subscription: Rc<RefCell<Option<Subscription>>> = use_hook(|| {
        let subscription = store.subscribe(move |value| {
            let mut online = online;
            online.set(value);
        });
        Rc::new(RefCell::new(Some(subscription)))
    });
    use_drop(move || {
        if let Some(subscription) = subscription.borrow_mut().take() {
            subscription.unsubscribe();
        }
    });

    online
}
