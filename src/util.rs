use env_logger::Builder;
use log::LevelFilter;

/// logger of the game binary
pub fn init_logging() {
    builder(LevelFilter::Info)
        .format_target(false)
        .init()
}

/// Logger for test binaries; output is captured by the test harness.
/// Subsequent calls are no-ops.
pub fn init_test_logging() {
    let _ = builder(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

fn builder(level: LevelFilter) -> Builder {
    let mut builder = env_logger::builder();
    builder
        .format_timestamp_secs()
        .filter_level(level);
    builder
}
