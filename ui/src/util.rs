use futures_timer::Delay;
use shellkit_core::overlay::{FrameDriver, Timer};
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// [`Timer`] backed by `futures-timer` on the browser's local executor.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelayTimer;

impl Timer for DelayTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        spawn_local(async move {
            Delay::new(delay).await;
            task();
        });
    }
}

/// Frame source used by animated components.
pub fn frame_driver(interval: Duration) -> FrameDriver<DelayTimer> {
    FrameDriver::new(DelayTimer, interval)
}
