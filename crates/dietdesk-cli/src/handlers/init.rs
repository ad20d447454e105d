use crate::config::Config;
use crate::context::ExecutionContext;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn handle(context: &ExecutionContext, base_url: &str) -> Result<()> {
    std::fs::create_dir_all(context.data_dir())?;

    let mut config = Config::load_from(&context.config_path())?;
    config.api.base_url = Some(base_url.trim_end_matches('/').to_string());
    config.save_to(&context.config_path())?;

    println!(
        "{} {}",
        "Configured service:".green(),
        config.api.base_url.as_deref().unwrap_or_default()
    );
    println!("Next: dietdesk session login --token <token>");
    Ok(())
}
