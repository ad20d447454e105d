use crate::args::{Cli, Commands, NotifyCommand, SessionCommand};
use crate::context::ExecutionContext;
use crate::handlers;
use anyhow::Result;
use dietdesk_core::resolve_data_dir;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    crate::logging::init(cli.log_level, &data_dir);

    log::debug!("data directory: {}", data_dir.display());

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    let context = ExecutionContext::new(data_dir);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::Init { base_url } => handlers::init::handle(&context, &base_url),

        Commands::Session { command } => match command {
            SessionCommand::Login { token } => handlers::session::login(&context, &token),
            SessionCommand::Logout => handlers::session::logout(&context),
            SessionCommand::Status => handlers::session::status(&context, cli.format),
        },

        Commands::Notify { command } => match command {
            NotifyCommand::List => runtime.block_on(handlers::notify::list(&context, cli.format)),
            NotifyCommand::Open { id } => {
                runtime.block_on(handlers::notify::open(&context, id, cli.format))
            }
            NotifyCommand::ReadAll => runtime.block_on(handlers::notify::read_all(&context)),
        },

        Commands::Panel => handlers::panel::handle(&context, &runtime),
    }
}

fn show_guidance(data_dir: &Path) {
    println!("{}", "dietdesk - diet/indent service client".bold());
    println!();
    println!("Data directory: {}", data_dir.display());
    println!();
    println!("Quick start:");
    println!("  dietdesk init --base-url <url>           point at a service");
    println!("  dietdesk session login --token <token>   store a session token");
    println!("  dietdesk notify list                     list pending notifications");
    println!("  dietdesk panel                           open the interactive panel");
    println!();
    println!("Run 'dietdesk --help' for the full command list.");
}
