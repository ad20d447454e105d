use serde::{Deserialize, Serialize};

use super::kind::NotificationKind;

/// UI-ready notification produced by normalization.
///
/// The in-memory list holding these is authoritative for read state:
/// an item is removed locally the moment the user opens it, whether or
/// not the remote acknowledgement lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Server identity, or the item's position in the filtered sequence
    /// when the payload carried none. Positional ids are not stable
    /// across refreshes; normalization logs when it has to substitute
    /// one.
    pub id: i64,

    pub kind: NotificationKind,

    pub title: String,

    pub message: String,

    /// Human time label. Defaults to "Just now" when the payload carried
    /// no timestamp.
    pub time: String,

    /// Always true under current policy: read items never reach the
    /// list.
    pub unread: bool,

    /// Indent the notification refers to, kept for route payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<i64>,

    /// Raw remarks, kept for route payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
