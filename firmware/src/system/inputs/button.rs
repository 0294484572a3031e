use crate::system::hal::gpio;

/// Tap button, wired active low against an internal pull-up.
pub struct Button {
    pin: Pin,
}

pub type Pin = gpio::ErasedPin<gpio::Input>;

impl Button {
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    pub fn pressed(&self) -> bool {
        self.pin.is_low()
    }
}
