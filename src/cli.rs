//! CLI domain: parse, route, help, output, and presentation only.
//! No switch logic; single route table dispatches to the field command service.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, wants_json};
pub use output::{map_error, map_error_json};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_list_result_json, format_list_result_text, format_preview_result_json,
    format_preview_result_text, format_show_result_json, format_show_result_text,
    format_switch_result_json, format_switch_result_text,
};
pub use route::RunContext;
