//! Abstraction of all digital inputs.
//!
//! None of the inputs is filtered. The timing core works with raw levels
//! and guards the tap button on its own.

mod button;
mod switches;

use tapclock_control::{Input, Snapshot};

use self::button::Button;
pub use self::button::Pin as ButtonPin;
pub use self::switches::Pins as SwitchesPins;
use self::switches::Switches;

use crate::system::hal::gpio;

pub type ClockInPin = gpio::ErasedPin<gpio::Input>;

pub struct Inputs {
    clock_in: ClockInPin,
    pub tap: Button,
    pub switches: Switches,
}

pub struct Config {
    pub clock_in: ClockInPin,
    pub tap: ButtonPin,
    pub switches: SwitchesPins,
}

impl Inputs {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            clock_in: config.clock_in,
            tap: Button::new(config.tap),
            switches: Switches::new(config.switches),
        }
    }

    pub fn read(&self, input: Input) -> bool {
        match input {
            Input::ClockIn => self.clock_in.is_high(),
            Input::Tap => self.tap.pressed(),
            Input::ModeSwitch1 => self.switches.mode(0),
            Input::ModeSwitch2 => self.switches.mode(1),
            Input::PassThrough(i) => self.switches.pass_through(i),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            clock_in: self.read(Input::ClockIn),
            tap: self.read(Input::Tap),
            mode_switch: [self.read(Input::ModeSwitch1), self.read(Input::ModeSwitch2)],
            ..Snapshot::default()
        };
        for (i, line) in snapshot.pass_through.iter_mut().enumerate() {
            *line = self.read(Input::PassThrough(i));
        }
        snapshot
    }
}
