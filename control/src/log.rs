//! Logging through defmt, compiled out when the feature is disabled.

macro_rules! info {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
    );
}

macro_rules! debug {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)+);
    );
}

pub(crate) use debug;
pub(crate) use info;
