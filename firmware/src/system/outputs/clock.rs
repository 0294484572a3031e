use crate::system::hal::gpio;

/// Clock output jack, the output LED is tied to the same line.
pub struct Clock {
    pin: Pin,
}

pub type Pin = gpio::ErasedPin<gpio::Output>;

impl Clock {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    pub fn set(&mut self, on: bool) {
        self.pin.set_state(on.into());
    }
}
