// UI and formatting module

pub mod formatters;

pub use formatters::format_size;
