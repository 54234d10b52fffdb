// Core decision pipeline

pub mod action;
pub mod config;
pub mod evaluator;
pub mod netdev;
pub mod quantity;

// Re-export commonly used items
pub use action::run_action;
pub use config::{Limits, ThrottleConfig};
pub use evaluator::{evaluate, status_line, Breach, Decision};
pub use netdev::{read_counters, CounterSample, NET_DEV_PATH};
pub use quantity::parse_byte_quantity;
