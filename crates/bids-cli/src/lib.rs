//! CLI library components for the BIDS inventory tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
