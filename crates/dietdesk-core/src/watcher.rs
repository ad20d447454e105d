use crate::token_store::TokenStore;
use crate::Result;
use dietdesk_types::SessionToken;
use notify::{Event, PollWatcher, RecursiveMode, Watcher};
use std::fs;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Change signal emitted when the stored token differs from the last
/// observed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEvent {
    /// New token state: `Some` when a token is present, `None` when it
    /// was cleared.
    Changed(Option<SessionToken>),
}

/// Watches the token file for external changes.
///
/// Another process logging out (or in) is observed here: the watcher
/// polls the data directory and emits [`TokenEvent::Changed`] whenever
/// the stored value moves away from the last one seen. Only the token
/// path is considered; unrelated files in the data directory never emit.
///
/// Dropping the watcher tears the subscription down.
pub struct TokenWatcher {
    _watcher: PollWatcher,
    rx: Receiver<TokenEvent>,
}

impl TokenWatcher {
    pub fn new(store: TokenStore) -> Result<Self> {
        let (tx, rx) = channel();

        let token_path = store.path().to_path_buf();
        // The token file may not exist yet; watch its directory instead.
        let watch_dir = token_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        fs::create_dir_all(&watch_dir)?;

        let mut last = store.load().unwrap_or_default();

        let config = notify::Config::default().with_poll_interval(Duration::from_millis(500));

        let mut watcher = PollWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| {
                let Ok(event) = res else { return };
                if !event.paths.iter().any(|path| path == &token_path) {
                    return;
                }
                let current = store.load().unwrap_or_default();
                if current != last {
                    log::debug!(
                        "session token changed externally (present: {})",
                        current.is_some()
                    );
                    last = current.clone();
                    let _ = tx.send(TokenEvent::Changed(current));
                }
            },
            config,
        )?;

        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for the next change, for UI tick loops.
    pub fn try_recv(&self) -> Option<TokenEvent> {
        self.rx.try_recv().ok()
    }

    /// Block until a change arrives or the timeout elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<TokenEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_emits_on_external_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());
        store.save(&SessionToken::new("abc123")).unwrap();

        let watcher = TokenWatcher::new(store.clone()).unwrap();
        store.clear().unwrap();

        let event = watcher.recv_timeout(Duration::from_secs(5));
        assert_eq!(event, Some(TokenEvent::Changed(None)));
    }

    #[test]
    fn test_emits_on_external_login() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());

        let watcher = TokenWatcher::new(store.clone()).unwrap();
        store.save(&SessionToken::new("abc123")).unwrap();

        let event = watcher.recv_timeout(Duration::from_secs(5));
        assert_eq!(
            event,
            Some(TokenEvent::Changed(Some(SessionToken::new("abc123"))))
        );
    }

    #[test]
    fn test_unrelated_files_do_not_emit() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());
        store.save(&SessionToken::new("abc123")).unwrap();

        let watcher = TokenWatcher::new(store.clone()).unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "x = 1").unwrap();

        assert_eq!(watcher.recv_timeout(Duration::from_secs(2)), None);
    }
}
