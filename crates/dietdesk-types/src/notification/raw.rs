use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::NotificationKind;

/// Response envelope for the notifications listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEnvelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub data: Vec<RawNotification>,
}

/// One notification exactly as the backend sends it.
///
/// Field presence varies by `type`: the newer workflow payloads
/// (`pc-del`, `pc-dtd`) carry `status`/`indent`/`remarks`, the legacy
/// ones carry `title`/`message`/`unread`. Everything except the
/// discriminator is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNotification {
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Workflow state of the newer payload shapes. Presence of this
    /// field selects the status branch of the inclusion rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Indent number the notification refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Read flag of the legacy payload shape. Only an explicit `false`
    /// excludes the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread: Option<bool>,

    /// Per-item update bag some legacy payloads attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_pc_del_payload() {
        let json = r#"{
            "type": "pc-del",
            "id": 7,
            "status": "New",
            "indent": 42,
            "remarks": "duplicate entry"
        }"#;
        let raw: RawNotification = serde_json::from_str(json).unwrap();
        assert_eq!(raw.kind, NotificationKind::PcDelete);
        assert_eq!(raw.id, Some(7));
        assert_eq!(raw.status.as_deref(), Some("New"));
        assert_eq!(raw.indent, Some(42));
    }

    #[test]
    fn test_decodes_legacy_payload_without_type() {
        let json = r#"{"title": "Menu changed", "message": "Lunch menu updated", "unread": true}"#;
        let raw: RawNotification = serde_json::from_str(json).unwrap();
        assert_eq!(raw.kind, NotificationKind::Other(String::new()));
        assert_eq!(raw.title.as_deref(), Some("Menu changed"));
        assert!(raw.status.is_none());
    }

    #[test]
    fn test_decodes_envelope() {
        let json = r#"{"error": false, "data": [{"type": "success", "message": "saved"}]}"#;
        let envelope: NotificationEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.error);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].kind, NotificationKind::Success);
    }
}
