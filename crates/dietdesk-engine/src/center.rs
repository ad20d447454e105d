use crate::normalize::normalize;
use crate::route::Route;
use dietdesk_api::ApiClient;
use dietdesk_core::TokenStore;
use dietdesk_types::{Notification, SessionToken};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Panel lifecycle.
///
/// `Failed` is deliberately absent: every failure degrades to `Empty`
/// (fail soft). `Idle` doubles as "panel closed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Loading,
    Populated,
    Empty,
}

/// What opening a notification resolved to.
#[derive(Debug)]
pub struct Dispatch {
    /// The item, already removed from the list.
    pub removed: Notification,

    /// At most one navigation destination; acknowledgement-only kinds
    /// carry `None`.
    pub route: Option<Route>,

    /// Handle of the spawned mark-read acknowledgement. Fire-and-forget
    /// by contract - dropping the handle detaches the task. One-shot
    /// front-ends may await it so the process does not exit under the
    /// in-flight request; the result never changes local state either
    /// way.
    pub ack: JoinHandle<()>,
}

/// Cheap clonable handle for the center's remote calls, so front-ends
/// can run them on background tasks without borrowing the center.
#[derive(Clone)]
pub struct Remote {
    api: Arc<ApiClient>,
    store: TokenStore,
}

impl Remote {
    fn valid_token(&self) -> Option<SessionToken> {
        match self.store.load() {
            Ok(Some(token)) if token.is_valid() => Some(token),
            _ => None,
        }
    }

    /// Fetch, filter and normalize. Never fails: an absent session and
    /// every wire-level failure produce an empty list with a log line.
    pub async fn fetch(&self) -> Vec<Notification> {
        let Some(token) = self.valid_token() else {
            log::warn!("no session token; skipping notification fetch");
            return Vec::new();
        };

        match self.api.fetch_notifications(&token).await {
            Ok(raw) => normalize(raw),
            Err(err) => {
                log::error!("failed to fetch notifications: {}", err);
                Vec::new()
            }
        }
    }

    /// Best-effort single-item acknowledgement. Skipped silently without
    /// a session; failures are logged, never surfaced.
    pub async fn ack_read(&self, id: i64) {
        let Some(token) = self.valid_token() else {
            log::warn!("no session token; skipping mark-read for notification {}", id);
            return;
        };

        if let Err(err) = self.api.mark_read(&token, id).await {
            log::warn!(
                "mark-read for notification {} failed: {} (local removal already applied)",
                id,
                err
            );
        }
    }

    /// Bulk acknowledgement. Returns true on success.
    pub async fn ack_all(&self) -> bool {
        let Some(token) = self.valid_token() else {
            log::warn!("no session token; skipping mark-all-read");
            return false;
        };

        match self.api.mark_all_read(&token).await {
            Ok(()) => true,
            Err(err) => {
                log::error!("mark-all-read failed: {}", err);
                false
            }
        }
    }
}

/// Owns the notification panel: state machine, the in-memory list, and
/// the dispatch contract.
///
/// The local list is authoritative for read state. Remote
/// acknowledgements are best-effort; a failed one leaves remote state
/// behind local state and is only logged.
pub struct NotificationCenter {
    remote: Remote,
    state: PanelState,
    items: Vec<Notification>,
    generation: u64,
}

impl NotificationCenter {
    pub fn new(api: Arc<ApiClient>, store: TokenStore) -> Self {
        Self {
            remote: Remote { api, store },
            state: PanelState::Idle,
            items: Vec::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Every listed item is unread under current policy.
    pub fn unread_count(&self) -> usize {
        self.items.len()
    }

    pub fn remote(&self) -> Remote {
        self.remote.clone()
    }

    /// Move to `Loading` and stamp a new generation. The caller passes
    /// the returned generation back to [`apply_refresh`] with the
    /// fetched items.
    ///
    /// [`apply_refresh`]: NotificationCenter::apply_refresh
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.state = PanelState::Loading;
        self.generation
    }

    /// Install a completed refresh. A completion whose generation was
    /// superseded by a newer [`begin_refresh`] is discarded; in-flight
    /// fetches are never cancelled, so a late arrival must not
    /// overwrite the list.
    ///
    /// [`begin_refresh`]: NotificationCenter::begin_refresh
    pub fn apply_refresh(&mut self, generation: u64, items: Vec<Notification>) -> bool {
        if generation != self.generation {
            log::debug!(
                "discarding stale notification fetch (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }

        self.state = if items.is_empty() {
            PanelState::Empty
        } else {
            PanelState::Populated
        };
        self.items = items;
        true
    }

    /// Begin, fetch and apply in one await - the path for front-ends
    /// without their own task plumbing.
    pub async fn refresh(&mut self) -> &[Notification] {
        let generation = self.begin_refresh();
        let items = self.remote.fetch().await;
        self.apply_refresh(generation, items);
        &self.items
    }

    /// Dispatch a selected notification:
    ///
    /// 1. spawn the fire-and-forget mark-read acknowledgement;
    /// 2. remove the item locally, regardless of the acknowledgement;
    /// 3. close the panel (state returns to `Idle`);
    /// 4. resolve at most one navigation destination.
    ///
    /// Returns `None` when the id is not in the list (already opened or
    /// never fetched); nothing is spawned in that case.
    pub fn open(&mut self, id: i64) -> Option<Dispatch> {
        let position = self.items.iter().position(|item| item.id == id)?;

        let remote = self.remote.clone();
        let ack = tokio::spawn(async move { remote.ack_read(id).await });

        let removed = self.items.remove(position);
        let route = Route::for_notification(&removed);
        self.state = PanelState::Idle;

        Some(Dispatch { removed, route, ack })
    }

    /// Bulk mark-all-read: on success the whole list clears
    /// unconditionally; on failure it is left untouched.
    pub async fn mark_all_read(&mut self) -> bool {
        if self.remote.ack_all().await {
            self.clear_all();
            true
        } else {
            false
        }
    }

    /// Unconditional local clear, for front-ends that ran [`Remote::ack_all`]
    /// on their own task.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.state = PanelState::Empty;
    }
}
