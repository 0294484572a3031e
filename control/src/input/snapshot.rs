//! Structures used to pass the current state of hardware peripherals.

use crate::io::{DigitalIo, Input, PASS_THROUGH_LINES};

/// The current state of all digital inputs.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// control package. It carries raw levels, with one exception: the tap
/// button is already converted from its active-low wiring to "pressed".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub clock_in: bool,
    pub tap: bool,
    pub mode_switch: [bool; 2],
    pub pass_through: [bool; PASS_THROUGH_LINES],
}

impl Snapshot {
    pub fn read(io: &mut impl DigitalIo) -> Self {
        let mut pass_through = [false; PASS_THROUGH_LINES];
        for (i, line) in pass_through.iter_mut().enumerate() {
            *line = io.read_input(Input::PassThrough(i));
        }
        Self {
            clock_in: io.read_input(Input::ClockIn),
            tap: io.read_input(Input::Tap),
            mode_switch: [
                io.read_input(Input::ModeSwitch1),
                io.read_input(Input::ModeSwitch2),
            ],
            pass_through,
        }
    }
}
