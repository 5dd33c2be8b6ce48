//! Integration tests for fieldswap

mod cli_routes;
mod config_integration;
mod field_switch;
