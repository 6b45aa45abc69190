//! Test doubles shared by the unit tests of the task loops.

use embedded_hal::delay::DelayNs;

use super::cancel::CancelToken;

/// No real sleep; records requested durations and cancels the token after
/// `remaining` sleeps.
pub struct CountdownDelay {
    remaining: u32,
    cancel: CancelToken,
    pub slept_ms: Vec<u32>,
}

impl CountdownDelay {
    pub fn new(remaining: u32, cancel: CancelToken) -> Self {
        Self {
            remaining,
            cancel,
            slept_ms: Vec::new(),
        }
    }
}

impl DelayNs for CountdownDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.slept_ms.push(ms);
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.cancel.cancel();
        }
    }
}
