//! UI rendering

mod combat_view;
mod help_view;
mod inventory_view;
mod map_view;
mod select_view;
mod sheet_view;

use crate::app::{App, Overlay, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use spire_core::CombatStatus;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title / hero summary
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Latest notice
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.screen {
        Screen::CharacterSelect => select_view::draw(f, app, chunks[1]),
        Screen::Map => map_view::draw(f, app, chunks[1]),
        Screen::Combat => combat_view::draw(f, app, chunks[1]),
    }

    draw_notice(f, app, chunks[2]);
    draw_keybindings(f, app, chunks[3]);

    if let Some(overlay) = app.overlay {
        let area = centered_rect(70, 80, chunks[1]);
        f.render_widget(Clear, area);
        match overlay {
            Overlay::CharacterSheet => sheet_view::draw(f, app, area),
            Overlay::Inventory => inventory_view::draw(f, app, area),
            Overlay::Help => help_view::draw(f, app, area),
        }
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "AETHERIUM SPIRES",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];

    if let Some(player) = app.player() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} Lv.{}", player.name, player.level),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            format!("  HP {}/{}", player.current_hp, player.max_hp),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::styled(
            format!("  EXP {}/{}", player.experience, player.exp_to_next_level),
            Style::default().fg(Color::Magenta),
        ));
        if player.stat_points > 0 {
            spans.push(Span::styled(
                format!("  +{} pts", player.stat_points),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_notice(f: &mut Frame, app: &App, area: Rect) {
    let text = app.last_notice().unwrap_or("");
    let paragraph = Paragraph::new(Span::styled(
        text.to_string(),
        Style::default().fg(Color::LightCyan),
    ))
    .block(Block::default().borders(Borders::ALL).title(" Log "));
    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("?", "Help"), ("q", "Quit")];

    let screen_keys: Vec<(&str, &str)> = match (app.overlay, app.screen) {
        (Some(Overlay::CharacterSheet), _) => vec![("1-3", "Spend point"), ("Esc", "Close")],
        (Some(Overlay::Inventory), _) => vec![("↑/↓", "Select"), ("Enter", "Equip"), ("Esc", "Close")],
        (Some(Overlay::Help), _) => vec![("Esc", "Close")],
        (None, Screen::CharacterSelect) => vec![("↑/↓", "Select hero"), ("Enter", "Start Adventure")],
        (None, Screen::Map) => vec![
            ("↑/↓", "Select island"),
            ("Enter", "Travel"),
            ("e", "Engage"),
            ("c", "Character"),
            ("i", "Inventory"),
            ("b", "Heroes"),
        ],
        (None, Screen::Combat) => match app.combat().combat_status {
            CombatStatus::Active => vec![("1-4", "Action"), ("Enter", "Use selected"), ("s", "Snapshot")],
            CombatStatus::Victory => vec![("Enter", "Return to Map")],
            CombatStatus::Defeat => vec![("r", "Try Again"), ("g", "Give Up")],
        },
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in screen_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !screen_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Rect of `percent_x` by `percent_y` centred in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn progress_bar(current: u32, max: u32, width: u16, filled_color: Color) -> Paragraph<'static> {
    let percent = if max > 0 {
        (current as f64 / max as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (percent * width as f64) as usize;
    let empty = (width as usize).saturating_sub(filled);

    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

    Paragraph::new(bar).style(Style::default().fg(filled_color))
}

/// Colour for an HP bar at `percent`
pub fn hp_color(percent: f64) -> Color {
    if percent > 50.0 {
        Color::Green
    } else if percent > 25.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn stat_line(name: &str, value: impl std::fmt::Display) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:16}", name), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}
