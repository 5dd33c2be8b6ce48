//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "switch", "show").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Switch { dry_run: true, .. } => "switch.dry_run",
        Commands::Switch { .. } => "switch",
        Commands::Show { .. } => "show",
        Commands::List { .. } => "list",
        Commands::Config => "config",
    }
}

/// Whether the command asked for JSON output; errors follow the same format.
pub fn wants_json(command: &Commands) -> bool {
    match command {
        Commands::Switch { format, .. }
        | Commands::Show { format, .. }
        | Commands::List { format } => format == "json",
        Commands::Config => false,
    }
}
