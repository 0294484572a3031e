#![no_std]
#![no_main]

use tapclock_firmware as _; // Panic handler.

#[defmt_test::tests]
mod tests {
    use tapclock_control::{DigitalIo, Input};
    use tapclock_firmware::system::io::Io;
    use tapclock_firmware::system::System;
    use tapclock_firmware::testlib::sample_until_tap_is_clicked;

    #[init]
    fn init() -> Io {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        System::init(cp, dp).io
    }

    #[test]
    fn tap_detects_click(io: &mut Io) {
        defmt::info!("Click the tap button");
        sample_until_tap_is_clicked(io);
        defmt::info!("OK");
    }

    #[test]
    fn clock_input_reads_both_levels(io: &mut Io) {
        defmt::info!("Unplug the clock input, then click the tap button");
        sample_until_tap_is_clicked(io);
        defmt::assert!(!io.read_input(Input::ClockIn));

        defmt::info!("Plug in a steady high gate, then click the tap button");
        sample_until_tap_is_clicked(io);
        defmt::assert!(io.read_input(Input::ClockIn));
        defmt::info!("OK");
    }
}
