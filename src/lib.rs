//! fieldswap: switch the active Natro Macro gathering field
//!
//! Reads per-field defaults from `field_config.ini` and patches them into slot 1
//! of `nm_config.ini`, leaving every other line of that file untouched.

pub mod cli;
pub mod command;
pub mod config;
pub mod defaults;
pub mod error;
pub mod field;
pub mod ini;
pub mod keys;
pub mod logging;
pub mod mapping;
pub mod patch;
pub mod switch;
