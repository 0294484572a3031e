//! Timing core of a tap tempo clock module.
//!
//! This package is hardware agnostic. It is meant to run in a firmware with
//! a single polling loop and a fixed-rate interrupt advancing the time base,
//! but all of it can run in software as well, which is how it is tested.
//!
//! Following is the flow of a single loop iteration:
//!
//! ```text
//!      [ Tick interrupt ]
//!              |
//!              V
//!         { Ticker } --(now)--+
//!                             V
//!    [ DigitalIo ] --(Snapshot)--> [ Store {Tempo} ] --(DesiredOutput)--> [ DigitalIo ]
//!     |    |    |                                                          |    |    |
//!  [Clock][Tap][Switches]                                          [Clock out][LED][Header]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

mod log;

pub mod config;
pub mod input;
pub mod io;
pub mod mode;
pub mod output;
pub mod store;
pub mod tempo;
pub mod ticker;

pub use config::{Boundary, Config};
pub use input::snapshot::Snapshot;
pub use io::{DigitalIo, Input, Output};
pub use mode::Mode;
pub use output::DesiredOutput;
pub use store::Store;
pub use ticker::{Ticker, TICK_RATE_HZ};
