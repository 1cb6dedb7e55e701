#![allow(dead_code)]

use shellkit_core::connectivity::{ConnectivityPlatform, PlatformWatch};
use shellkit_core::error::ConnectivityError;
use shellkit_core::overlay::{Timer, TransitionDriver, TransitionHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

struct Scheduled {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// Timer with a manually advanced clock. Tasks run in due order, ties in
/// scheduling order.
#[derive(Default)]
pub struct VirtualTimer {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    tasks: RefCell<Vec<Scheduled>>,
}

impl VirtualTimer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Moves the clock forward, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let deadline = self.now.get() + by;
        loop {
            let next = {
                let mut tasks = self.tasks.borrow_mut();
                let position = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, scheduled)| scheduled.due <= deadline)
                    .min_by_key(|(_, scheduled)| (scheduled.due, scheduled.seq))
                    .map(|(position, _)| position);
                position.map(|position| tasks.remove(position))
            };
            let Some(scheduled) = next else {
                break;
            };
            self.now.set(scheduled.due);
            (scheduled.task)();
        }
        self.now.set(deadline);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Timer for VirtualTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.tasks.borrow_mut().push(Scheduled {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }
}

/// Animation collaborator that never reports anything.
pub struct SilentDriver;

impl TransitionDriver for SilentDriver {
    fn start(&self, _duration: Duration, _handle: TransitionHandle) {}
}

/// Scriptable stand-in for the host connectivity primitive.
#[derive(Default)]
pub struct FakePlatform {
    online: Option<bool>,
    callback: Rc<RefCell<Option<Rc<dyn Fn(bool)>>>>,
    registrations: Rc<Cell<usize>>,
}

impl FakePlatform {
    pub fn reporting(online: bool) -> Self {
        FakePlatform {
            online: Some(online),
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        FakePlatform::default()
    }

    /// Simulates one platform change notification.
    pub fn emit(&self, online: bool) {
        let callback = self.callback.borrow().clone();
        if let Some(callback) = callback {
            callback(online);
        }
    }

    pub fn active_registrations(&self) -> usize {
        self.registrations.get()
    }
}

impl ConnectivityPlatform for FakePlatform {
    fn current(&self) -> Option<bool> {
        self.online
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Result<PlatformWatch, ConnectivityError> {
        if self.online.is_none() {
            return Err(ConnectivityError::Unavailable(
                "navigator.onLine not supported".to_string(),
            ));
        }
        *self.callback.borrow_mut() = Some(Rc::from(on_change));
        self.registrations.set(self.registrations.get() + 1);

        let callback = self.callback.clone();
        let registrations = self.registrations.clone();
        Ok(PlatformWatch::new(move || {
            callback.borrow_mut().take();
            registrations.set(registrations.get() - 1);
        }))
    }
}

/// Records every value a listener receives.
pub fn recording_listener() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |online| sink.borrow_mut().push(online))
}
