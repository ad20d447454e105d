use crate::transport::{ApiTransport, HttpTransport};
use crate::{endpoints, Error, Result};
use dietdesk_types::{NotificationEnvelope, RawNotification, SessionToken};
use std::sync::Arc;
use std::time::Duration;

/// Client for the notification endpoints of the diet/indent service.
///
/// Every call requires a valid session token and returns
/// [`Error::NoSession`] without touching the wire when given an invalid
/// one. Fail-soft policy (swallowing failures into empty lists) is the
/// engine's job, not this layer's.
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(timeout)?),
            base_url: base_url.into(),
        })
    }

    /// Swap the wire implementation; tests script one.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw pending-notification list.
    ///
    /// Decodes the `{ error, data }` envelope; an `error: true` envelope
    /// is an [`Error::Application`] even when the transport succeeded.
    pub async fn fetch_notifications(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<RawNotification>> {
        if !token.is_valid() {
            return Err(Error::NoSession);
        }

        let url = endpoints::notifications(&self.base_url);
        let body = self.transport.get_json(&url, token).await?;
        let envelope: NotificationEnvelope = serde_json::from_value(body)?;

        if envelope.error {
            return Err(Error::Application(
                "notifications endpoint reported an error".to_string(),
            ));
        }

        Ok(envelope.data)
    }

    /// Acknowledge a single notification. The response body is ignored.
    pub async fn mark_read(&self, token: &SessionToken, id: i64) -> Result<()> {
        if !token.is_valid() {
            return Err(Error::NoSession);
        }

        let url = endpoints::notification_read(&self.base_url, id);
        self.transport.put(&url, token).await
    }

    /// Acknowledge every pending notification.
    pub async fn mark_all_read(&self, token: &SessionToken) -> Result<()> {
        if !token.is_valid() {
            return Err(Error::NoSession);
        }

        let url = endpoints::notifications_read_all(&self.base_url);
        self.transport.put(&url, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct RecordingTransport {
        calls: Mutex<Vec<String>>,
        body: Value,
    }

    #[async_trait]
    impl ApiTransport for RecordingTransport {
        async fn get_json(&self, url: &str, _token: &SessionToken) -> Result<Value> {
            self.calls.lock().unwrap().push(format!("GET {}", url));
            Ok(self.body.clone())
        }

        async fn put(&self, url: &str, _token: &SessionToken) -> Result<()> {
            self.calls.lock().unwrap().push(format!("PUT {}", url));
            Ok(())
        }
    }

    fn client_with(body: Value) -> (ApiClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport {
            calls: Mutex::new(Vec::new()),
            body,
        });
        let client = ApiClient::with_transport("https://host/api/v1", transport.clone());
        (client, transport)
    }

    #[tokio::test]
    async fn test_invalid_token_short_circuits() {
        let (client, transport) = client_with(json!({"error": false, "data": []}));
        let result = client
            .fetch_notifications(&SessionToken::new("demo-token"))
            .await;
        assert!(matches!(result, Err(Error::NoSession)));
        assert!(transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_decodes_envelope() {
        let (client, _) = client_with(json!({
            "error": false,
            "data": [{"type": "success", "id": 1, "message": "saved"}]
        }));
        let data = client
            .fetch_notifications(&SessionToken::new("abc123"))
            .await
            .unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].id, Some(1));
    }

    #[tokio::test]
    async fn test_error_envelope_is_application_error() {
        let (client, _) = client_with(json!({"error": true, "data": []}));
        let result = client.fetch_notifications(&SessionToken::new("abc123")).await;
        assert!(matches!(result, Err(Error::Application(_))));
    }

    #[tokio::test]
    async fn test_mark_read_hits_per_item_endpoint() {
        let (client, transport) = client_with(json!(null));
        client
            .mark_read(&SessionToken::new("abc123"), 42)
            .await
            .unwrap();
        assert_eq!(
            transport.calls.lock().unwrap().as_slice(),
            ["PUT https://host/api/v1/notifications/42/read"]
        );
    }
}
