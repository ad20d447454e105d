// NOTE: Command Organization Rationale
//
// Namespaced subcommands (session, notify) instead of flat commands:
// the two namespaces mirror the two subsystems (session guard,
// notification center), and `--help` groups related operations.
// Every protected command evaluates the session guard before running;
// the guard's redirect decision becomes an error pointing at
// `session login`.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
mod tui;
pub mod types;

pub use args::{Cli, Commands, NotifyCommand, SessionCommand};
pub use commands::run;
