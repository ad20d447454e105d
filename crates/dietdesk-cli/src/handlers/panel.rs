use crate::context::ExecutionContext;
use crate::tui;
use anyhow::Result;
use dietdesk_engine::NotificationCenter;

pub fn handle(context: &ExecutionContext, runtime: &tokio::runtime::Runtime) -> Result<()> {
    context.require_session()?;

    let center = NotificationCenter::new(context.api_client()?, context.token_store());
    let guard = context.guard();

    let outcome = {
        let _enter = runtime.enter();
        tui::run(center, guard)?
    };

    for line in &outcome.lines {
        println!("{}", line);
    }

    // A dispatched item's acknowledgement is fire-and-forget for the
    // panel, but the process should not exit under the in-flight
    // request.
    if let Some(ack) = outcome.ack {
        let _ = runtime.block_on(ack);
    }

    Ok(())
}
