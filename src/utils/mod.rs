//! Utils module - Shared utilities and helpers

/// Logger setup for the command-line front end
pub mod logging;
