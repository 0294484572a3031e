use tapclock_control::io::PASS_THROUGH_LINES;

use crate::system::hal::gpio;

/// Header pins connected to jumpers of the main clock module.
pub struct Header {
    pins: Pins,
}

pub type Pins = [Pin; PASS_THROUGH_LINES];

pub type Pin = gpio::ErasedPin<gpio::Output>;

impl Header {
    #[must_use]
    pub fn new(pins: Pins) -> Self {
        Self { pins }
    }

    pub fn set(&mut self, line: usize, on: bool) {
        self.pins[line].set_state(on.into());
    }
}
