use crate::context::ExecutionContext;
use crate::presentation::notify::{print_route, print_table};
use crate::types::OutputFormat;
use anyhow::Result;
use dietdesk_engine::NotificationCenter;

fn center_for(context: &ExecutionContext) -> Result<NotificationCenter> {
    Ok(NotificationCenter::new(
        context.api_client()?,
        context.token_store(),
    ))
}

pub async fn list(context: &ExecutionContext, format: OutputFormat) -> Result<()> {
    context.require_session()?;
    let mut center = center_for(context)?;
    let items = center.refresh().await;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No new notifications.");
    } else {
        print_table(items);
        println!(
            "{} unread notification{}",
            items.len(),
            if items.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

pub async fn open(context: &ExecutionContext, id: i64, format: OutputFormat) -> Result<()> {
    context.require_session()?;
    let mut center = center_for(context)?;
    center.refresh().await;

    let Some(dispatch) = center.open(id) else {
        anyhow::bail!("Notification {} not found (already read or never pending)", id);
    };
    // One-shot process: wait out the acknowledgement instead of exiting
    // under it. The dispatch above is already final either way.
    let _ = dispatch.ack.await;

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "opened": dispatch.removed,
                "route": dispatch.route,
            }))?
        );
        return Ok(());
    }

    println!("Marked '{}' as read.", dispatch.removed.title);
    match &dispatch.route {
        Some(route) => print_route(route),
        None => println!("No further action for this notification type."),
    }
    Ok(())
}

pub async fn read_all(context: &ExecutionContext) -> Result<()> {
    context.require_session()?;
    let mut center = center_for(context)?;
    center.refresh().await;
    let count = center.unread_count();

    if count == 0 {
        println!("No new notifications.");
        return Ok(());
    }

    if center.mark_all_read().await {
        println!(
            "Marked {} notification{} as read.",
            count,
            if count == 1 { "" } else { "s" }
        );
        Ok(())
    } else {
        anyhow::bail!("Could not mark notifications as read; nothing was changed")
    }
}
