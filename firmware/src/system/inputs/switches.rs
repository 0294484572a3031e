use tapclock_control::io::PASS_THROUGH_LINES;

use crate::system::hal::gpio;

/// Panel switches wired to this board.
///
/// The mode switch is an ON-OFF-ON switch with its pole tied high, read
/// through two lines. The remaining switches are only passed through to
/// the header of the main clock module.
pub struct Switches {
    pins: Pins,
}

pub struct Pins {
    pub mode: [Pin; 2],
    pub pass_through: [Pin; PASS_THROUGH_LINES],
}

pub type Pin = gpio::ErasedPin<gpio::Input>;

impl Switches {
    pub fn new(pins: Pins) -> Self {
        Self { pins }
    }

    pub fn mode(&self, line: usize) -> bool {
        self.pins.mode[line].is_high()
    }

    pub fn pass_through(&self, line: usize) -> bool {
        self.pins.pass_through[line].is_high()
    }
}
