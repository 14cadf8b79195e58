//! Terminal logging for the command-line tools

use log::LevelFilter;
use simplelog::{Color, ColorChoice, ConfigBuilder, Level, TermLogger, TerminalMode};

/// Install a `simplelog` terminal logger at `level`
///
/// Everything goes to stderr so workload and fixture output on stdout stays
/// machine-readable.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = ConfigBuilder::new();
    builder.set_location_level(LevelFilter::Off);
    builder.set_target_level(LevelFilter::Off);
    builder.set_thread_level(LevelFilter::Trace);
    builder.set_level_color(Level::Trace, Some(Color::Green));
    let config = builder.build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

/// Log level for a `-v` count: 0 is info, 1 debug, more is trace
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Info);
        assert_eq!(level_for_verbosity(1), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(4), LevelFilter::Trace);
    }
}
