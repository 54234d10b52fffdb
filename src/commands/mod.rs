// Command handlers module
pub mod throttle;
pub mod version;

// Re-exports for cleaner imports
pub use throttle::execute as throttle;
pub use version::execute as version;
