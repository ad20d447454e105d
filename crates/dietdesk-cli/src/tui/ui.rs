use super::PanelApp;
use crate::presentation::notify::kind_icon;
use crate::presentation::time::format_relative_time;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub(super) fn draw(frame: &mut Frame, app: &PanelApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .split(frame.area());

    let unread = app.center.unread_count();
    let header_text = if unread > 0 {
        format!(
            " New Notifications ({} unread notification{})",
            unread,
            if unread == 1 { "" } else { "s" }
        )
    } else {
        " New Notifications".to_string()
    };
    let header = Paragraph::new(header_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let body = Block::default().borders(Borders::ALL);

    if app.signed_out {
        let notice = Paragraph::new(vec![
            Line::from(""),
            Line::from("Signed out."),
            Line::from("Run 'dietdesk session login --token <token>' and reopen the panel."),
        ])
        .block(body);
        frame.render_widget(notice, chunks[1]);
    } else if let Some(busy) = app.busy {
        let loading = Paragraph::new(vec![Line::from(""), Line::from(busy)]).block(body);
        frame.render_widget(loading, chunks[1]);
    } else if app.center.items().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("No new notifications"),
            Line::from("You're all caught up! New notifications will appear here."),
        ])
        .block(body);
        frame.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = app
            .center
            .items()
            .iter()
            .map(|item| {
                ListItem::new(format!(
                    "{} {}: {} ({})",
                    kind_icon(&item.kind),
                    item.title,
                    item.message,
                    format_relative_time(&item.time)
                ))
            })
            .collect();

        let list = List::new(items)
            .block(body)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(app.selected));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    let footer = Paragraph::new(" Enter open | j/k move | r refresh | a read all | q close")
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}
