use log::LevelFilter;

/// The most verbose level that the firmware logger emits.
#[cfg(feature = "verbose_log")]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
/// The most verbose level that the firmware logger emits.
#[cfg(not(feature = "verbose_log"))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
