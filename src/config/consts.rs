/// Default number of lines retained per loggable key
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
/// Default subsystem identifier handed to the platform log
pub const DEFAULT_SUBSYSTEM: &str = "app";
