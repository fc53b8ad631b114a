pub mod sink;

pub use sink::{ConsoleSink, LogCallback, PlatformSink};
