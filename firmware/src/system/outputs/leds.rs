use crate::system::hal::gpio;

pub struct Leds {
    clock_in: Pin,
}

pub type Pin = gpio::ErasedPin<gpio::Output>;

impl Leds {
    #[must_use]
    pub fn new(clock_in: Pin) -> Self {
        Self { clock_in }
    }

    pub fn set_clock_in(&mut self, on: bool) {
        self.clock_in.set_state(on.into());
    }
}
