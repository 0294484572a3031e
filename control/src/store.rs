//! The state of the control loop, carried from one iteration to another.

use crate::config::Config;
use crate::input::snapshot::Snapshot;
use crate::io::DigitalIo;
use crate::mode::Mode;
use crate::output::DesiredOutput;
use crate::tempo::Tempo;

/// The main store of the module.
///
/// This struct is the central piece of the control package. It takes
/// an input `Snapshot` together with the current tick, resolves the mode,
/// passes the levels to the tempo state machine and returns the desired
/// state of outputs.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    tempo: Tempo,
}

impl Store {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            tempo: Tempo::new(config),
        }
    }

    /// Run a single iteration of the control loop against hardware.
    pub fn poll(&mut self, now: u32, io: &mut impl DigitalIo) -> DesiredOutput {
        let snapshot = Snapshot::read(io);
        let desired_output = self.apply_input_snapshot(now, snapshot);
        desired_output.write(io);
        desired_output
    }

    pub fn apply_input_snapshot(&mut self, now: u32, snapshot: Snapshot) -> DesiredOutput {
        // Mode is resolved on every iteration, the switch takes effect
        // immediately.
        let mode = Mode::from_switches(snapshot.mode_switch[0], snapshot.mode_switch[1]);
        self.tempo.apply(now, mode, snapshot.clock_in, snapshot.tap);
        DesiredOutput {
            clock_out: self.tempo.clock_out(),
            clock_in_led: self.tempo.clock_in_led(),
            pass_through: snapshot.pass_through,
        }
    }

    #[must_use]
    pub fn tempo(&self) -> &Tempo {
        &self.tempo
    }
}
