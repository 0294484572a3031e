pub mod inputs;
pub mod io;
pub mod outputs;
pub mod tick;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;
use tapclock_control::TICK_RATE_HZ;

use inputs::{Config as InputsConfig, Inputs, SwitchesPins};
use io::Io;
use outputs::{Config as OutputsConfig, Outputs};
use tick::TickTimer;

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub tick_timer: TickTimer,
    pub io: Io,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;

        let tick_timer = TickTimer::new(dp.TIM2.timer(
            TICK_RATE_HZ.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        let inputs = Inputs::new(InputsConfig {
            clock_in: pins.GPIO.PIN_B10.into_floating_input().erase(),
            tap: pins.GPIO.PIN_B9.into_pull_up_input().erase(),
            switches: SwitchesPins {
                // The pole of the mode switch is tied high, unused throw floats.
                mode: [
                    pins.GPIO.PIN_B7.into_pull_down_input().erase(),
                    pins.GPIO.PIN_B8.into_pull_down_input().erase(),
                ],
                pass_through: [
                    pins.GPIO.PIN_A8.into_pull_up_input().erase(),
                    pins.GPIO.PIN_A9.into_pull_up_input().erase(),
                    pins.GPIO.PIN_D1.into_pull_up_input().erase(),
                    pins.GPIO.PIN_D2.into_pull_up_input().erase(),
                    pins.GPIO.PIN_D3.into_pull_up_input().erase(),
                    pins.GPIO.PIN_D4.into_pull_up_input().erase(),
                ],
            },
        });

        let outputs = Outputs::new(OutputsConfig {
            clock: pins.GPIO.PIN_B5.into_push_pull_output().erase(),
            clock_in_led: pins.GPIO.PIN_B6.into_push_pull_output().erase(),
            header: [
                pins.GPIO.PIN_D5.into_push_pull_output().erase(),
                pins.GPIO.PIN_D6.into_push_pull_output().erase(),
                pins.GPIO.PIN_D7.into_push_pull_output().erase(),
                pins.GPIO.PIN_D8.into_push_pull_output().erase(),
                pins.GPIO.PIN_D9.into_push_pull_output().erase(),
                pins.GPIO.PIN_D10.into_push_pull_output().erase(),
            ],
        });

        Self {
            mono,
            status_led,
            tick_timer,
            io: Io { inputs, outputs },
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
