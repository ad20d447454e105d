use async_trait::async_trait;
use dietdesk_api::{ApiTransport, Error, Result};
use dietdesk_types::SessionToken;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Scripted wire for engine tests: queue GET bodies, toggle failures,
/// and inspect every call afterwards.
#[derive(Default)]
pub struct ScriptedTransport {
    get_bodies: Mutex<VecDeque<Value>>,
    fail_gets: AtomicBool,
    fail_puts: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the body the next GET returns. Bodies are consumed in
    /// order.
    pub fn push_get_body(&self, body: Value) {
        self.get_bodies.lock().unwrap().push_back(body);
    }

    pub fn set_gets_failing(&self, fail: bool) {
        self.fail_gets.store(fail, Ordering::SeqCst);
    }

    pub fn set_puts_failing(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    /// Every call made so far, as `"<METHOD> <url>"` lines.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn get_json(&self, url: &str, _token: &SessionToken) -> Result<Value> {
        self.calls.lock().unwrap().push(format!("GET {}", url));

        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(Error::Transport("scripted transport failure".to_string()));
        }

        self.get_bodies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Transport("no scripted GET body queued".to_string()))
    }

    async fn put(&self, url: &str, _token: &SessionToken) -> Result<()> {
        self.calls.lock().unwrap().push(format!("PUT {}", url));

        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(Error::Transport("scripted transport failure".to_string()));
        }

        Ok(())
    }
}
