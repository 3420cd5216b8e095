//! Storage layer for lodash-compat
//!
//! Handles the TOML configuration file used by the command-line front end.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
