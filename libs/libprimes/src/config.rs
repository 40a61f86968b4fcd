//! Program configuration
//!
//! Everything is fixed at compile time. The two binaries differ only in
//! where the prime index comes from; the `verbose` feature raises the log
//! level.

use log::LevelFilter;

/// Index computed by `primes1000`.
pub const FIXED_INDEX: u64 = 1000;

/// Output buffer size in bytes, sentinel included.
pub const MESSAGE_CAPACITY: usize = 100;

#[cfg(feature = "verbose")]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Trace;
#[cfg(not(feature = "verbose"))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Where the prime index comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSource {
    /// `argv[1]`, which must be the only argument.
    Argument,
    /// A constant; arguments are ignored.
    Fixed(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub index: IndexSource,
    pub log_level: LevelFilter,
    /// Name shown in the usage line.
    pub program: &'static str,
}

impl Config {
    pub const fn argument(program: &'static str) -> Self {
        Self {
            index: IndexSource::Argument,
            log_level: DEFAULT_LOG_LEVEL,
            program,
        }
    }

    pub const fn fixed(program: &'static str, n: u64) -> Self {
        Self {
            index: IndexSource::Fixed(n),
            log_level: DEFAULT_LOG_LEVEL,
            program,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_the_index_source() {
        assert_eq!(Config::argument("primes").index, IndexSource::Argument);
        assert_eq!(
            Config::fixed("primes1000", FIXED_INDEX).index,
            IndexSource::Fixed(1000)
        );
    }

    #[test]
    fn both_variants_use_the_default_log_level() {
        assert_eq!(Config::argument("primes").log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(Config::fixed("primes1000", 7).log_level, DEFAULT_LOG_LEVEL);
    }
}
