use tapclock_control::{DigitalIo, Input};

use crate::system::io::Io;

const MS: u32 = 480_000_000 / 1000;

/// Block until the tap button goes from released to pressed.
pub fn sample_until_tap_is_clicked(io: &mut Io) {
    loop {
        let was_down = io.read_input(Input::Tap);
        cortex_m::asm::delay(MS);
        let is_down = io.read_input(Input::Tap);
        if !was_down && is_down {
            break;
        }
    }
}

pub fn delay_ms(ms: u32) {
    cortex_m::asm::delay(ms * MS);
}
