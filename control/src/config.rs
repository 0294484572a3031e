//! Tweaking of the default timing behavior.

/// Ticks a released trigger must stay released before the output drops.
///
/// For external clock strikes this is also the width of the generated
/// pulse, since a strike is observed for a single iteration only.
pub const DEFAULT_GUARD_INTERVAL: u32 = 10;

/// How period boundaries of the running clock are detected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Boundary {
    /// Fire only on the exact tick of the boundary. An iteration arriving
    /// late misses the boundary for the whole cycle.
    #[default]
    Exact,
    /// Fire once as soon as the boundary was reached or passed. The phase
    /// anchor advances by whole periods, so a late iteration does not
    /// accumulate drift.
    Crossing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub guard_interval: u32,
    pub boundary: Boundary,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            guard_interval: DEFAULT_GUARD_INTERVAL,
            boundary: Boundary::default(),
        }
    }
}
