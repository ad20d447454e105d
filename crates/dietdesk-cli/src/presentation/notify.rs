use comfy_table::{presets::UTF8_FULL, Cell, Table};
use dietdesk_engine::Route;
use dietdesk_types::{Notification, NotificationKind};
use owo_colors::OwoColorize;

use super::time::format_relative_time;

/// Per-kind glyph, carried over from the web client's bell panel.
pub fn kind_icon(kind: &NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✅",
        NotificationKind::Warning => "⚠️",
        NotificationKind::Error => "❌",
        NotificationKind::StockNew => "📦",
        NotificationKind::OrderUpdate => "🛒",
        NotificationKind::PcDelete => "🗑️",
        NotificationKind::PcDeleted => "📄",
        NotificationKind::Other(_) => "🔔",
    }
}

pub fn print_table(items: &[Notification]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Type", "Title", "Message", "Time"]);

    for item in items {
        table.add_row(vec![
            Cell::new(item.id),
            Cell::new(format!("{} {}", kind_icon(&item.kind), item.kind.tag())),
            Cell::new(&item.title),
            Cell::new(&item.message),
            Cell::new(format_relative_time(&item.time)),
        ]);
    }

    println!("{table}");
}

pub fn print_route(route: &Route) {
    println!("{} {}", "->".cyan(), route.path());
    match route {
        Route::StockUpdate { notification } => {
            println!(
                "   carrying notification #{} ({})",
                notification.id, notification.title
            );
        }
        Route::DeletePurchaseConfirmation {
            indent_id,
            remarks,
            notification_id,
        } => {
            if let Some(indent_id) = indent_id {
                println!("   indent: #{}", indent_id);
            }
            if let Some(remarks) = remarks {
                println!("   remarks: {}", remarks);
            }
            println!("   notification: #{}", notification_id);
        }
    }
}
