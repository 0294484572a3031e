mod clock;
mod header;
mod leds;

use tapclock_control::{DesiredOutput, Output};

use self::clock::{Clock, Pin as ClockPin};
use self::header::Header;
pub use self::header::Pins as HeaderPins;
use self::leds::{Leds, Pin as LedPin};

pub struct Outputs {
    pub clock: Clock,
    pub leds: Leds,
    pub header: Header,
}

pub struct Config {
    pub clock: ClockPin,
    pub clock_in_led: LedPin,
    pub header: HeaderPins,
}

impl Outputs {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            clock: Clock::new(config.clock),
            leds: Leds::new(config.clock_in_led),
            header: Header::new(config.header),
        }
    }

    pub fn write(&mut self, output: Output, level: bool) {
        match output {
            Output::ClockOut => self.clock.set(level),
            Output::ClockInLed => self.leds.set_clock_in(level),
            Output::PassThrough(i) => self.header.set(i, level),
        }
    }

    pub fn set(&mut self, desired: &DesiredOutput) {
        self.clock.set(desired.clock_out);
        self.leds.set_clock_in(desired.clock_in_led);
        for (i, level) in desired.pass_through.iter().enumerate() {
            self.header.set(i, *level);
        }
    }
}
