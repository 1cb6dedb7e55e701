//! Wiring between a [`Presence`] machine and the collaborators that animate it.
//!
//! [`OverlayController`] owns the machine. Whenever the visibility flag starts
//! a transition it hands a [`TransitionHandle`] to the [`TransitionDriver`]
//! and arms a watchdog on the [`Timer`]. The handle only acts while its
//! ticket is still current, so frames and completions from a superseded
//! transition fall on the floor.

use crate::presence::{Phase, Presence, TransitionTicket};
use crate::transition::{Pose, TransitionConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::debug;

/// Runs a task after a delay on the host event loop.
pub trait Timer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Animates one transition and reports back through its handle.
///
/// Implementations call [`TransitionHandle::frame`] as time passes and
/// [`TransitionHandle::complete`] when done. Nothing breaks if they never
/// call `complete`; the controller's watchdog resolves the transition.
pub trait TransitionDriver {
    fn start(&self, duration: Duration, handle: TransitionHandle);
}

impl<T: Timer + ?Sized> Timer for Rc<T> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        (**self).schedule(delay, task)
    }
}

impl<D: TransitionDriver + ?Sized> TransitionDriver for Rc<D> {
    fn start(&self, duration: Duration, handle: TransitionHandle) {
        (**self).start(duration, handle)
    }
}

/// What a renderer needs to draw the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySnapshot {
    pub phase: Phase,
    pub pose: Pose,
}

impl OverlaySnapshot {
    /// Resting state before the overlay has ever been shown.
    pub fn hidden(config: &TransitionConfig) -> Self {
        OverlaySnapshot {
            phase: Phase::Hidden,
            pose: config.pose_at(0.0),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.phase.is_mounted()
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }
}

impl From<&Presence> for OverlaySnapshot {
    fn from(presence: &Presence) -> Self {
        OverlaySnapshot {
            phase: presence.phase(),
            pose: presence.pose(),
        }
    }
}

type ChangeListener = Rc<dyn Fn(OverlaySnapshot)>;

struct Shared {
    presence: Presence,
    on_change: Option<ChangeListener>,
}

/// Applies `update` to the machine and notifies the listener if it reports
/// a change. The listener runs after the borrow is released.
fn update_shared(shared: &RefCell<Shared>, update: impl FnOnce(&mut Presence) -> bool) {
    let notify = {
        let mut shared = shared.borrow_mut();
        if !update(&mut shared.presence) {
            return;
        }
        shared
            .on_change
            .clone()
            .map(|listener| (listener, OverlaySnapshot::from(&shared.presence)))
    };
    if let Some((listener, snapshot)) = notify {
        listener(snapshot);
    }
}

/// Capability handed to a [`TransitionDriver`] for one transition.
#[derive(Clone)]
pub struct TransitionHandle {
    ticket: TransitionTicket,
    shared: Weak<RefCell<Shared>>,
}

impl TransitionHandle {
    pub fn ticket(&self) -> TransitionTicket {
        self.ticket
    }

    /// Whether this transition is still the one in flight.
    pub fn is_current(&self) -> bool {
        self.shared
            .upgrade()
            .map(|shared| shared.borrow().presence.is_current(&self.ticket))
            .unwrap_or(false)
    }

    /// Reports `elapsed` time since the previous frame.
    ///
    /// Returns `true` while the transition is still running and wants more
    /// frames.
    pub fn frame(&self, elapsed: Duration) -> bool {
        let Some(shared) = self.shared.upgrade() else {
            return false;
        };
        let mut running = false;
        update_shared(&shared, |presence| {
            if !presence.is_current(&self.ticket) {
                return false;
            }
            running = presence.advance(&self.ticket, elapsed).is_none();
            true
        });
        running
    }

    /// Completion notification. Ignored if the transition was superseded.
    pub fn complete(&self) {
        if let Some(shared) = self.shared.upgrade() {
            update_shared(&shared, |presence| presence.complete(&self.ticket).is_some());
        }
    }

    fn expire(&self) {
        if let Some(shared) = self.shared.upgrade() {
            update_shared(&shared, |presence| {
                presence.force_resolve(&self.ticket).is_some()
            });
        }
    }
}

/// Drives a [`Presence`] from a visibility flag.
pub struct OverlayController<D, T> {
    shared: Rc<RefCell<Shared>>,
    driver: D,
    timer: T,
}

impl<D: TransitionDriver, T: Timer> OverlayController<D, T> {
    pub fn new(config: TransitionConfig, driver: D, timer: T) -> Self {
        OverlayController {
            shared: Rc::new(RefCell::new(Shared {
                presence: Presence::new(config),
                on_change: None,
            })),
            driver,
            timer,
        }
    }

    /// Registers the listener called after every phase or pose change.
    /// Replaces any previous listener.
    pub fn on_change(&self, listener: impl Fn(OverlaySnapshot) + 'static) {
        self.shared.borrow_mut().on_change = Some(Rc::new(listener));
    }

    pub fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot::from(&self.shared.borrow().presence)
    }

    pub fn phase(&self) -> Phase {
        self.shared.borrow().presence.phase()
    }

    pub fn set_visible(&self, visible: bool) {
        let mut started = None;
        update_shared(&self.shared, |presence| {
            let Some(ticket) = presence.set_visible(visible) else {
                return false;
            };
            started = Some((
                ticket,
                presence.remaining(),
                presence.config().completion_grace(),
            ));
            true
        });

        let Some((ticket, remaining, grace)) = started else {
            return;
        };

        let handle = TransitionHandle {
            ticket,
            shared: Rc::downgrade(&self.shared),
        };
        let watchdog = handle.clone();
        debug!(
            "Starting {} transition over {:?} (generation {})",
            ticket.direction(),
            remaining,
            ticket.generation()
        );
        self.driver.start(remaining, handle);
        self.timer
            .schedule(remaining + grace, Box::new(move || watchdog.expire()));
    }

    /// Returns to `Hidden` immediately, abandoning any transition in flight.
    pub fn reset(&self) {
        update_shared(&self.shared, |presence| {
            presence.reset();
            true
        });
    }

    /// Detaches the listener and resets, for when the owning view goes away.
    pub fn teardown(&self) {
        self.shared.borrow_mut().on_change = None;
        self.reset();
    }
}

/// Timer-driven frame source: ticks every `interval` until the transition
/// has run for its full duration, then reports completion.
#[derive(Clone)]
pub struct FrameDriver<T> {
    timer: T,
    interval: Duration,
}

impl<T> FrameDriver<T> {
    pub fn new(timer: T, interval: Duration) -> Self {
        FrameDriver { timer, interval }
    }
}

impl<T: Timer + Clone + 'static> FrameDriver<T> {
    fn tick(timer: T, interval: Duration, remaining: Duration, handle: TransitionHandle) {
        let step = interval.min(remaining);
        let next_timer = timer.clone();
        timer.schedule(
            step,
            Box::new(move || {
                if !handle.frame(step) {
                    return;
                }
                let remaining = remaining.saturating_sub(step);
                if remaining.is_zero() {
                    handle.complete();
                } else {
                    Self::tick(next_timer, interval, remaining, handle);
                }
            }),
        );
    }
}

impl<T: Timer + Clone + 'static> TransitionDriver for FrameDriver<T> {
    fn start(&self, duration: Duration, handle: TransitionHandle) {
        let interval = if self.interval.is_zero() {
            duration
        } else {
            self.interval
        };
        let ticket = handle.ticket();
        debug!(
            "Frame driver running {} transition (generation {}) in {:?} steps",
            ticket.direction(),
            ticket.generation(),
            interval
        );
        Self::tick(self.timer.clone(), interval, duration, handle);
    }
}
