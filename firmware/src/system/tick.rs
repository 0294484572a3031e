//! Time base of the control loop.

use tapclock_control::Ticker;

use super::hal::pac::TIM2;
use super::hal::timer::{Event, Timer};

/// Tick counter shared between `TickTimer`'s interrupt and the loop.
pub static TICKER: Ticker = Ticker::new();

/// Hardware timer raising an interrupt on every tick.
pub struct TickTimer {
    timer: Timer<TIM2>,
}

impl TickTimer {
    #[must_use]
    pub fn new(mut timer: Timer<TIM2>) -> Self {
        timer.listen(Event::TimeOut);
        Self { timer }
    }

    /// Acknowledge the interrupt and advance the shared counter.
    pub fn tick(&mut self) {
        self.timer.clear_irq();
        TICKER.tick();
    }
}
