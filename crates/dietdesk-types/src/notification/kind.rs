use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator tag carried by backend notification payloads.
///
/// The tag set is closed over the workflows the service emits today;
/// anything else (including an absent tag) lands in `Other` with the
/// original string preserved, so unknown payloads still render through
/// the default presentation instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    /// Stock update request raised against a store
    StockNew,
    /// Purchase confirmation delete request (pending approval)
    PcDelete,
    /// Purchase confirmation deleted (acknowledgement only)
    PcDeleted,
    /// Order lifecycle update
    OrderUpdate,
    Success,
    Warning,
    Error,
    /// Unknown or absent tag, original value preserved
    Other(String),
}

impl NotificationKind {
    /// Wire tag as the backend spells it.
    pub fn tag(&self) -> &str {
        match self {
            NotificationKind::StockNew => "Stock-New",
            NotificationKind::PcDelete => "pc-del",
            NotificationKind::PcDeleted => "pc-dtd",
            NotificationKind::OrderUpdate => "Order-Update",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
            NotificationKind::Other(tag) => tag,
        }
    }
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::Other(String::new())
    }
}

impl From<String> for NotificationKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Stock-New" => NotificationKind::StockNew,
            "pc-del" => NotificationKind::PcDelete,
            "pc-dtd" => NotificationKind::PcDeleted,
            "Order-Update" => NotificationKind::OrderUpdate,
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Other(tag),
        }
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.tag().to_string()
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
