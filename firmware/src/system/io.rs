//! Binding of the control package to the GPIOs of this board.

use tapclock_control::{DigitalIo, Input, Output};

use super::inputs::Inputs;
use super::outputs::Outputs;

pub struct Io {
    pub inputs: Inputs,
    pub outputs: Outputs,
}

impl DigitalIo for Io {
    fn read_input(&mut self, input: Input) -> bool {
        self.inputs.read(input)
    }

    fn write_output(&mut self, output: Output, level: bool) {
        self.outputs.write(output, level);
    }
}
