//! Operating modes selected by the three-position panel switch.
//!
//! The switch is ON-OFF-ON with its pole tied high. Each throw is read by
//! one line: the first one is high when the switch points down, the second
//! one when it points up.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Switch up. Taps add triggers on top of the running clock.
    RunTapAdd,
    /// Switch centered. Taps set the tempo of the running clock.
    RunTapTempo,
    /// Switch down. Taps pass straight to the output, the clock is stopped.
    DirectNoRun,
}

impl Mode {
    #[must_use]
    pub fn from_switches(switch_1: bool, switch_2: bool) -> Self {
        if switch_1 {
            Self::DirectNoRun
        } else if switch_2 {
            Self::RunTapAdd
        } else {
            Self::RunTapTempo
        }
    }

    /// Whether the internal oscillator drives the output.
    #[must_use]
    pub fn runs(self) -> bool {
        self != Self::DirectNoRun
    }

    #[must_use]
    pub fn sets_tempo(self) -> bool {
        self == Self::RunTapTempo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_switch_is_centered_it_sets_tempo() {
        assert_eq!(Mode::from_switches(false, false), Mode::RunTapTempo);
    }

    #[test]
    fn when_switch_is_up_it_adds_taps() {
        assert_eq!(Mode::from_switches(false, true), Mode::RunTapAdd);
    }

    #[test]
    fn when_switch_is_down_it_stops_running() {
        assert_eq!(Mode::from_switches(true, false), Mode::DirectNoRun);
        assert_eq!(Mode::from_switches(true, true), Mode::DirectNoRun);
        assert!(!Mode::DirectNoRun.runs());
        assert!(Mode::RunTapAdd.runs());
        assert!(Mode::RunTapTempo.runs());
    }
}
