#![no_std]
#![no_main]

use tapclock_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use tapclock_control::{Config, DesiredOutput, Store, TICK_RATE_HZ};
    use tapclock_firmware::system::io::Io;
    use tapclock_firmware::system::System;
    use tapclock_firmware::testlib::{delay_ms, sample_until_tap_is_clicked};

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn leds_go_on_and_off(system: &mut System) {
        let io: &mut Io = &mut system.io;

        defmt::info!("Click the tap button");
        sample_until_tap_is_clicked(io);

        io.outputs.set(&DesiredOutput::default());
        defmt::info!("Click the tap button if all leds are dimmed");
        sample_until_tap_is_clicked(io);

        io.outputs.set(&DesiredOutput {
            clock_out: true,
            clock_in_led: true,
            pass_through: [true; 6],
        });
        defmt::info!("Click the tap button if all leds are lit up");
        sample_until_tap_is_clicked(io);
    }

    #[test]
    fn clock_output_acts_as_a_trigger(system: &mut System) {
        let io: &mut Io = &mut system.io;

        defmt::info!("Connect a trigger destination to clock output, and click the button");
        sample_until_tap_is_clicked(io);

        defmt::info!("Confirm that there are 4 regular triggers");
        for _ in 0..4 {
            io.outputs.clock.set(true);
            delay_ms(10);
            io.outputs.clock.set(false);
            delay_ms(990);
        }

        defmt::info!("Click the button to end this test");
        sample_until_tap_is_clicked(io);
    }

    #[test]
    fn store_runs_against_hardware(system: &mut System) {
        let mut store = Store::new(Config::default());
        defmt::info!("Turn the mode switch down and tap, the clock output must follow");
        let mut now: u32 = 0;
        for _ in 0..(TICK_RATE_HZ * 10) {
            store.poll(now, &mut system.io);
            now = now.wrapping_add(1);
            cortex_m::asm::delay(480_000_000 / TICK_RATE_HZ);
        }
    }
}
