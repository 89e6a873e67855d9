//! Inventory overlay

use crate::app::{App, INVENTORY_SLOTS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_slots(f, app, chunks[0]);
    draw_details(f, app, chunks[1]);
}

fn draw_slots(f: &mut Frame, app: &App, area: Rect) {
    let inventory = app.player().map(|p| p.inventory.as_slice()).unwrap_or(&[]);

    let items: Vec<ListItem> = (0..INVENTORY_SLOTS.max(inventory.len()))
        .map(|i| match inventory.get(i) {
            Some(item) => {
                let style = if i == app.selected_item {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:2}. {}", i + 1, item.name), style),
                    Span::styled(
                        format!("  ({})", item.kind.name()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            }
            None => ListItem::new(Span::styled(
                format!("{:2}. ·", i + 1),
                Style::default().fg(Color::DarkGray),
            )),
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Inventory "));
    f.render_widget(list, area);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let selected = app
        .player()
        .and_then(|p| p.inventory.get(app.selected_item));

    let lines = match selected {
        Some(item) => vec![
            Line::from(Span::styled(
                item.name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                item.kind.name().to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(item.description.clone()),
            Line::from(""),
            Line::from(Span::styled(
                item.bonus_summary(),
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
            Line::from(Span::styled("[Enter] Equip", Style::default().fg(Color::Cyan))),
        ],
        None => vec![Line::from(Span::styled(
            "Select an item to view details",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
