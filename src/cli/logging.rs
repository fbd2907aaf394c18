use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command line flags
pub fn log_level(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(level: LevelFilter) {
    // Only fails when a logger is already installed
    let _ = SimpleLogger::new()
        .with_level(level)
        .init();
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false, false), LevelFilter::Info);
        assert_eq!(log_level(false, true), LevelFilter::Error);
        assert_eq!(log_level(true, true), LevelFilter::Debug);
    }
}
