use dietdesk_types::{Notification, NotificationKind, RawNotification};

const DEFAULT_TIME_LABEL: &str = "Just now";

/// Two-branch inclusion rule.
///
/// Payloads carrying a `status` belong to the newer workflow and count
/// as pending only while `status == "New"`. Legacy payloads without one
/// are pending unless explicitly marked read - inclusion is the
/// default, `unread: false` the only opt-out.
pub fn is_pending(raw: &RawNotification) -> bool {
    match &raw.status {
        Some(status) => status == "New",
        None => raw.unread != Some(false),
    }
}

/// Filter the raw payload list down to pending items and normalize
/// them, preserving order.
pub fn normalize(raw: Vec<RawNotification>) -> Vec<Notification> {
    raw.into_iter()
        .filter(is_pending)
        .enumerate()
        .map(|(index, item)| normalize_one(item, index))
        .collect()
}

fn normalize_one(raw: RawNotification, index: usize) -> Notification {
    let id = match raw.id {
        Some(id) => id,
        None => {
            // Positional ids are not stable across refreshes; flag the
            // payload instead of substituting silently.
            log::warn!(
                "notification '{}' carries no id; substituting list position {}",
                raw.title.as_deref().unwrap_or(raw.kind.tag()),
                index
            );
            index as i64
        }
    };

    let time = raw
        .time
        .clone()
        .or_else(|| raw.created_at.clone())
        .unwrap_or_else(|| DEFAULT_TIME_LABEL.to_string());

    let (title, message) = match &raw.kind {
        NotificationKind::StockNew => (
            raw.title
                .clone()
                .unwrap_or_else(|| "Stock Update Request".to_string()),
            raw.remarks
                .clone()
                .or_else(|| raw.message.clone())
                .unwrap_or_else(|| "Stock update notification".to_string()),
        ),
        NotificationKind::PcDelete => (
            format!("PC Delete Request - Indent #{}", indent_label(&raw)),
            status_remarks_line(&raw),
        ),
        NotificationKind::PcDeleted => (
            format!("PC Deleted - Indent #{}", indent_label(&raw)),
            status_remarks_line(&raw),
        ),
        NotificationKind::OrderUpdate
        | NotificationKind::Success
        | NotificationKind::Warning
        | NotificationKind::Error
        | NotificationKind::Other(_) => (
            raw.title.clone().unwrap_or_else(|| "Notification".to_string()),
            raw.message
                .clone()
                .or_else(|| raw.description.clone())
                .unwrap_or_default(),
        ),
    };

    // An absent tag renders through the default branch above but is
    // labeled "info" from here on.
    let kind = match raw.kind {
        NotificationKind::Other(tag) if tag.is_empty() => {
            NotificationKind::Other("info".to_string())
        }
        other => other,
    };

    Notification {
        id,
        kind,
        title,
        message,
        time,
        unread: true,
        indent: raw.indent,
        remarks: raw.remarks,
    }
}

fn indent_label(raw: &RawNotification) -> String {
    raw.indent
        .map(|indent| indent.to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn status_remarks_line(raw: &RawNotification) -> String {
    format!(
        "Status: {} | Remarks: {}",
        raw.status.as_deref().unwrap_or_default(),
        raw.remarks.as_deref().unwrap_or_default()
    )
}
