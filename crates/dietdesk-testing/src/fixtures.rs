//! Raw notification payloads as the backend sends them.

use serde_json::{json, Value};

/// Stock update request payload.
pub fn stock_new(id: i64, remarks: &str) -> Value {
    json!({
        "type": "Stock-New",
        "id": id,
        "remarks": remarks,
        "created_at": "2026-08-01T10:00:00Z"
    })
}

/// Purchase-confirmation delete request payload (newer workflow shape).
pub fn pc_del(id: i64, indent: i64, status: &str, remarks: &str) -> Value {
    json!({
        "type": "pc-del",
        "id": id,
        "indent": indent,
        "status": status,
        "remarks": remarks
    })
}

/// Purchase-confirmation deleted acknowledgement payload.
pub fn pc_dtd(id: i64, indent: i64, remarks: &str) -> Value {
    json!({
        "type": "pc-dtd",
        "id": id,
        "indent": indent,
        "status": "New",
        "remarks": remarks
    })
}

/// Legacy payload shape: no `status`, read state in `unread`.
pub fn legacy(id: i64, kind: &str, title: &str, message: &str, unread: bool) -> Value {
    json!({
        "type": kind,
        "id": id,
        "title": title,
        "message": message,
        "unread": unread
    })
}

/// The `{ error, data }` envelope the listing endpoint returns.
pub fn envelope(data: Vec<Value>) -> Value {
    json!({ "error": false, "data": data })
}

/// Envelope with `error: true` and no usable data.
pub fn error_envelope() -> Value {
    json!({ "error": true, "data": [] })
}

/// Five pending items of mixed types, ids 1-5.
pub fn mixed_pending() -> Vec<Value> {
    vec![
        stock_new(1, "quantity revised"),
        pc_del(2, 42, "New", "duplicate entry"),
        pc_dtd(3, 9, "cleanup"),
        legacy(4, "success", "Indent approved", "Indent #12 approved", true),
        legacy(5, "warning", "Stock low", "Rice below threshold", true),
    ]
}
