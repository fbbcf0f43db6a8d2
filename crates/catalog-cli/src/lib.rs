//! CLI library components for the course catalog.

pub mod logging;
pub mod render;
pub mod shell;
