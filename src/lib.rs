pub mod config;
pub mod meet;
pub mod output;
pub mod results;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;
