/// System adapters: wall-clock time and thread sleep
mod system_clock;

pub use system_clock::SystemClock;
