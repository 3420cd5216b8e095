//! Command-line front end: argument types and command dispatch

pub mod dispatcher;
pub mod main_types;
