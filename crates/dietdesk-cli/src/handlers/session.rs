use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use anyhow::Result;
use dietdesk_types::SessionToken;
use owo_colors::OwoColorize;

pub fn login(context: &ExecutionContext, token: &str) -> Result<()> {
    let token = SessionToken::new(token.trim());
    if !token.is_valid() {
        anyhow::bail!("Refusing to store an empty or placeholder token");
    }

    context.token_store().save(&token)?;
    println!("{}", "Signed in.".green());
    Ok(())
}

pub fn logout(context: &ExecutionContext) -> Result<()> {
    context.token_store().clear()?;
    println!("Signed out.");
    Ok(())
}

pub fn status(context: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let guard = context.guard();
    let token = guard.token();

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({ "authorized": token.is_some() })
        );
        return Ok(());
    }

    match token {
        Some(token) => println!("Signed in (token {}).", token.redacted()),
        None => println!("Not signed in. Run 'dietdesk session login --token <token>'."),
    }
    Ok(())
}
