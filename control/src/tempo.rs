//! Derive the output clock from taps and external clock strikes.

use crate::config::{Boundary, Config};
use crate::input::edge::{Edge, EdgeDetector};
use crate::log;
use crate::mode::Mode;
use crate::ticker::elapsed;

/// The tap tempo state machine.
///
/// Call `apply` once per control loop iteration with the current tick and
/// raw levels of the clock input and the tap button. Read `clock_out` and
/// `clock_in_led` for the levels the outputs should hold.
///
/// A strike is either a press of the tap button or a rising edge on the
/// clock input. Each strike raises the output right away. In the center
/// position of the mode switch, the distance between two strikes becomes
/// the period of the running clock and the strike resets its phase. Once
/// a period is known, the output keeps toggling on every half period
/// until the mode switch is turned down.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tempo {
    config: Config,
    clock_in: EdgeDetector,
    strike: EdgeDetector,
    period: u32,
    anchor: u32,
    last_strike: u32,
    time_of_tap: u32,
    half_passed: bool,
    clock_out: bool,
    clock_in_led: bool,
}

impl Tempo {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, now: u32, mode: Mode, clock_in: bool, tap: bool) {
        let clock_just_struck = self.detect_clock_edge(clock_in);
        self.handle_strike(now, mode, tap || clock_just_struck);
        match self.config.boundary {
            Boundary::Exact => self.run_exact(now, mode),
            Boundary::Crossing => self.run_crossing(now, mode),
        }
    }

    #[must_use]
    pub fn clock_out(&self) -> bool {
        self.clock_out
    }

    #[must_use]
    pub fn clock_in_led(&self) -> bool {
        self.clock_in_led
    }

    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }

    #[must_use]
    pub fn anchor(&self) -> u32 {
        self.anchor
    }

    fn detect_clock_edge(&mut self, clock_in: bool) -> bool {
        match self.clock_in.update(clock_in) {
            Some(Edge::Rose) => {
                self.clock_in_led = true;
                true
            }
            Some(Edge::Fell) => {
                self.clock_in_led = false;
                false
            }
            None => false,
        }
    }

    fn handle_strike(&mut self, now: u32, mode: Mode, struck: bool) {
        if struck {
            self.time_of_tap = now;
            if let Some(Edge::Rose) = self.strike.update(true) {
                log::debug!("Strike at tick={}", now);
                if mode.sets_tempo() {
                    self.period = elapsed(now, self.last_strike);
                    self.last_strike = now;
                    self.reset_phase(now);
                    log::info!("Setting tapped period={}", self.period);
                }
                // NOTE: Direct feedback applies in all modes, including
                // the one where the running clock drives the output too.
                self.clock_out = true;
            }
        } else if elapsed(now, self.time_of_tap) > self.config.guard_interval {
            if let Some(Edge::Fell) = self.strike.update(false) {
                self.clock_out = false;
            }
        }
    }

    fn reset_phase(&mut self, now: u32) {
        self.anchor = now;
        self.half_passed = false;
    }

    fn run_exact(&mut self, now: u32, mode: Mode) {
        let since_anchor = elapsed(now, self.anchor);
        if since_anchor == self.period / 2 && mode.runs() {
            self.clock_out = false;
        }
        if since_anchor == self.period {
            self.anchor = now;
            if mode.runs() {
                self.clock_out = true;
            }
        }
    }

    fn run_crossing(&mut self, now: u32, mode: Mode) {
        if self.period == 0 {
            return;
        }

        let since_anchor = elapsed(now, self.anchor);
        if !self.half_passed && since_anchor >= self.period / 2 {
            self.half_passed = true;
            if mode.runs() {
                self.clock_out = false;
            }
        }
        if since_anchor >= self.period {
            let missed_whole_period = since_anchor - self.period >= self.period;
            self.anchor = if missed_whole_period {
                now
            } else {
                self.anchor.wrapping_add(self.period)
            };
            self.half_passed = false;
            if mode.runs() {
                self.clock_out = true;
            }
        }
    }
}
