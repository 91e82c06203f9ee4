//! Ambient support shared by the `timewalker` crates: errors, configuration,
//! timezone name resolution and logging setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod timezone;
