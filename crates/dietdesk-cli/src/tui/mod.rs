//! Interactive notification panel.
//!
//! Event-driven loop in the terminal: background fetches and the bulk
//! acknowledgement run as tasks and post completions back over a
//! channel, so the panel stays responsive while they are in flight.
//! Per-item mark-read is fire-and-forget and never shows a spinner.

mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use dietdesk_core::{TokenEvent, TokenWatcher};
use dietdesk_engine::{NotificationCenter, SessionGuard};
use dietdesk_types::Notification;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Completions posted back by background tasks.
enum PanelMsg {
    Fetched {
        generation: u64,
        items: Vec<Notification>,
    },
    ReadAllDone(bool),
}

/// What the panel leaves behind after closing: lines to print on the
/// regular screen, and the acknowledgement of a dispatched item (if
/// any) so the process can wait it out before exiting.
pub(crate) struct PanelOutcome {
    pub lines: Vec<String>,
    pub ack: Option<JoinHandle<()>>,
}

struct PanelApp {
    center: NotificationCenter,
    guard: SessionGuard,
    selected: usize,
    busy: Option<&'static str>,
    signed_out: bool,
    should_close: bool,
    lines: Vec<String>,
    ack: Option<JoinHandle<()>>,
    tx: Sender<PanelMsg>,
    rx: Receiver<PanelMsg>,
}

impl PanelApp {
    fn new(center: NotificationCenter, guard: SessionGuard) -> Self {
        let (tx, rx) = channel();
        let signed_out = !guard.is_authorized();
        Self {
            center,
            guard,
            selected: 0,
            busy: None,
            signed_out,
            should_close: false,
            lines: Vec::new(),
            ack: None,
            tx,
            rx,
        }
    }

    fn start_refresh(&mut self) {
        let generation = self.center.begin_refresh();
        self.busy = Some("Loading notifications...");

        let remote = self.center.remote();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let items = remote.fetch().await;
            let _ = tx.send(PanelMsg::Fetched { generation, items });
        });
    }

    fn start_read_all(&mut self) {
        if self.signed_out || self.center.items().is_empty() {
            return;
        }
        self.busy = Some("Marking all as read...");

        let remote = self.center.remote();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let ok = remote.ack_all().await;
            let _ = tx.send(PanelMsg::ReadAllDone(ok));
        });
    }

    fn on_msg(&mut self, msg: PanelMsg) {
        match msg {
            PanelMsg::Fetched { generation, items } => {
                // Superseded completions are discarded by the center;
                // the spinner stays up for the fetch still in flight.
                if self.center.apply_refresh(generation, items) {
                    self.busy = None;
                    self.clamp_selection();
                }
            }
            PanelMsg::ReadAllDone(ok) => {
                self.busy = None;
                if ok {
                    self.center.clear_all();
                    self.selected = 0;
                }
            }
        }
    }

    fn on_token_change(&mut self) {
        let was_signed_out = self.signed_out;
        self.signed_out = !self.guard.is_authorized();
        if was_signed_out && !self.signed_out {
            self.start_refresh();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_close = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('r') => {
                if !self.signed_out {
                    self.start_refresh();
                }
            }
            KeyCode::Char('a') => self.start_read_all(),
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn open_selected(&mut self) {
        if self.signed_out || self.busy.is_some() {
            return;
        }
        let Some(item) = self.center.items().get(self.selected) else {
            return;
        };
        let id = item.id;

        if let Some(dispatch) = self.center.open(id) {
            self.lines
                .push(format!("Marked '{}' as read.", dispatch.removed.title));
            if let Some(route) = &dispatch.route {
                self.lines.push(format!("-> {}", route.path()));
            }
            self.ack = Some(dispatch.ack);
            // The panel closes on dispatch; the route is shown on the
            // regular screen afterwards.
            self.should_close = true;
        }
    }

    fn select_next(&mut self) {
        let len = self.center.items().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.center.items().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Restore terminal state when the panel exits, normally or not.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the panel until the user closes it or dispatches an item.
///
/// Must be called with a tokio runtime entered; background work is
/// spawned onto it.
pub(crate) fn run(center: NotificationCenter, guard: SessionGuard) -> Result<PanelOutcome> {
    let watcher: TokenWatcher = guard.subscribe()?;
    let mut app = PanelApp::new(center, guard);

    // Activation always triggers a fetch, even signed out - it resolves
    // to an empty panel either way.
    app.start_refresh();

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let _restore = TerminalGuard;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    while !app.should_close {
        while let Ok(msg) = app.rx.try_recv() {
            app.on_msg(msg);
        }
        while let Some(TokenEvent::Changed(_)) = watcher.try_recv() {
            app.on_token_change();
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }

    Ok(PanelOutcome {
        lines: app.lines,
        ack: app.ack,
    })
}
