use crate::io::{DigitalIo, Output, PASS_THROUGH_LINES};

/// Desired state of all output lines.
///
/// This structure transfers request to the module, asking to lit LEDs,
/// set the clock output and mirror switches to the jumper header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub clock_out: bool,
    pub clock_in_led: bool,
    pub pass_through: [bool; PASS_THROUGH_LINES],
}

impl DesiredOutput {
    pub fn write(&self, io: &mut impl DigitalIo) {
        io.write_output(Output::ClockOut, self.clock_out);
        io.write_output(Output::ClockInLed, self.clock_in_led);
        for (i, level) in self.pass_through.iter().enumerate() {
            io.write_output(Output::PassThrough(i), *level);
        }
    }
}
