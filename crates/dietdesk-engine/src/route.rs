use dietdesk_types::{Notification, NotificationKind};
use serde::Serialize;

/// Typed navigation destinations a dispatched notification can resolve
/// to. The front-end decides how to render the push; the payloads here
/// are the navigation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "destination", rename_all = "kebab-case")]
pub enum Route {
    /// Stock update screen, carrying the selected notification.
    StockUpdate { notification: Notification },

    /// Purchase-confirmation delete screen.
    DeletePurchaseConfirmation {
        indent_id: Option<i64>,
        remarks: Option<String>,
        notification_id: i64,
    },
}

impl Route {
    /// Exactly one destination per kind. Acknowledgement-only kinds
    /// (`pc-dtd`) and everything without a defined destination resolve
    /// to `None`.
    pub fn for_notification(notification: &Notification) -> Option<Route> {
        match notification.kind {
            NotificationKind::StockNew => Some(Route::StockUpdate {
                notification: notification.clone(),
            }),
            NotificationKind::PcDelete => Some(Route::DeletePurchaseConfirmation {
                indent_id: notification.indent,
                remarks: notification.remarks.clone(),
                notification_id: notification.id,
            }),
            NotificationKind::PcDeleted
            | NotificationKind::OrderUpdate
            | NotificationKind::Success
            | NotificationKind::Warning
            | NotificationKind::Error
            | NotificationKind::Other(_) => None,
        }
    }

    /// Stable path of the destination, for display and logs.
    pub fn path(&self) -> &'static str {
        match self {
            Route::StockUpdate { .. } => "/stock-update",
            Route::DeletePurchaseConfirmation { .. } => "/delete-pc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(kind: NotificationKind) -> Notification {
        Notification {
            id: 7,
            kind,
            title: "t".to_string(),
            message: "m".to_string(),
            time: "Just now".to_string(),
            unread: true,
            indent: Some(42),
            remarks: Some("dup".to_string()),
        }
    }

    #[test]
    fn test_stock_new_routes_to_stock_update_with_state() {
        let n = notification(NotificationKind::StockNew);
        let route = Route::for_notification(&n).unwrap();
        assert_eq!(route.path(), "/stock-update");
        assert_eq!(route, Route::StockUpdate { notification: n });
    }

    #[test]
    fn test_pc_del_routes_with_indent_state() {
        let route = Route::for_notification(&notification(NotificationKind::PcDelete)).unwrap();
        assert_eq!(
            route,
            Route::DeletePurchaseConfirmation {
                indent_id: Some(42),
                remarks: Some("dup".to_string()),
                notification_id: 7,
            }
        );
    }

    #[test]
    fn test_acknowledgement_kinds_have_no_destination() {
        for kind in [
            NotificationKind::PcDeleted,
            NotificationKind::Success,
            NotificationKind::Warning,
            NotificationKind::Error,
            NotificationKind::OrderUpdate,
            NotificationKind::Other("info".to_string()),
        ] {
            assert_eq!(Route::for_notification(&notification(kind)), None);
        }
    }
}
