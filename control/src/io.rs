//! Capability to read and drive the digital lines of the module.
//!
//! The timing core never touches pins directly. Whoever runs the control
//! loop passes in an implementation of `DigitalIo`: the firmware binds it
//! to GPIOs, tests bind it to plain memory.

/// Number of switch lines mirrored to the jumper header.
pub const PASS_THROUGH_LINES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    ClockIn,
    /// Logical level, high while the button is pressed.
    Tap,
    ModeSwitch1,
    ModeSwitch2,
    PassThrough(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Output {
    /// Clock output jack, its LED is wired to the same line.
    ClockOut,
    ClockInLed,
    PassThrough(usize),
}

pub trait DigitalIo {
    fn read_input(&mut self, input: Input) -> bool;
    fn write_output(&mut self, output: Output, level: bool);
}
