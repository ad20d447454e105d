use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dietdesk")]
#[command(about = "Client for the diet/indent service: sessions, notifications, dispatch", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding the token, config and logs
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Point the client at a service and create the data directory
    Init {
        /// Base URL of the remote API, e.g. https://host/api/v1
        #[arg(long)]
        base_url: String,
    },

    /// Session token management
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Notification center
    Notify {
        #[command(subcommand)]
        command: NotifyCommand,
    },

    /// Interactive notification panel
    Panel,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Store a session token issued by the service
    Login {
        #[arg(long)]
        token: String,
    },

    /// Clear the stored session token
    Logout,

    /// Show whether a session is active
    Status,
}

#[derive(Subcommand)]
pub enum NotifyCommand {
    /// Fetch and list pending notifications
    List,

    /// Open a notification: mark it read and resolve its destination
    Open { id: i64 },

    /// Mark every pending notification as read
    ReadAll,
}
