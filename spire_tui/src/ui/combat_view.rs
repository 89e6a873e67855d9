//! Combat view

use super::{hp_color, progress_bar};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use spire_core::combat::DEFEAT_LOG_LINE;
use spire_core::{Character, CombatStatus, Side};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Combatants
            Constraint::Min(0),    // Log
            Constraint::Length(6), // Action bar
        ])
        .split(area);

    let combatants = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let state = app.combat();
    draw_combatant(f, &state.player, state.current_turn == Side::Player, combatants[0]);
    draw_combatant(f, &state.enemy, state.current_turn == Side::Enemy, combatants[1]);
    draw_combat_log(f, app, rows[1]);
    draw_action_bar(f, app, rows[2]);
}

fn draw_combatant(f: &mut Frame, character: &Character, acting: bool, area: Rect) {
    let percent = character.hp_percent();
    let color = hp_color(percent);

    let title = if acting {
        format!(" ▶ {} ", character.name)
    } else {
        format!(" {} ", character.name)
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let hp = Line::from(vec![
        Span::styled("HP ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", character.current_hp, character.max_hp),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ATK {}  DEF {}", character.attack_power, character.defense),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(hp), chunks[0]);
    f.render_widget(
        progress_bar(character.current_hp, character.max_hp, chunks[1].width, color),
        chunks[1],
    );
}

fn draw_combat_log(f: &mut Frame, app: &App, area: Rect) {
    let log = &app.combat().combat_log;
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = log
        .iter()
        .skip(log.len().saturating_sub(visible))
        .map(|line| {
            let style = if line.starts_with("VICTORY") {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if line == DEFEAT_LOG_LINE {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if line.starts_with("You used") {
                Style::default().fg(Color::Green)
            } else if line.starts_with("Combat Started") {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::LightRed)
            };
            ListItem::new(Span::styled(line.clone(), style))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Combat Log "));
    f.render_widget(list, area);
}

fn draw_action_bar(f: &mut Frame, app: &App, area: Rect) {
    let state = app.combat();

    let lines: Vec<Line> = match state.combat_status {
        CombatStatus::Victory => vec![
            Line::from(Span::styled(
                "VICTORY",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from("[Enter] Return to Map"),
        ],
        CombatStatus::Defeat => vec![
            Line::from(Span::styled(
                "DEFEAT",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from("[r] Try Again   [g] Give Up"),
        ],
        CombatStatus::Active => {
            let ready = state.can_act(Side::Player);
            app.actions()
                .iter()
                .enumerate()
                .map(|(i, action)| {
                    let selected = i == app.selected_action;
                    let style = if !ready {
                        Style::default().fg(Color::DarkGray)
                    } else if selected {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let kind_color = if action.is_aetherial() {
                        Color::Magenta
                    } else {
                        Color::Blue
                    };
                    Line::from(vec![
                        Span::styled(format!("[{}] {:18}", i + 1, action.name), style),
                        Span::styled(format!("{:>3} dmg  ", action.damage), Style::default().fg(kind_color)),
                        Span::styled(
                            action.description.clone().unwrap_or_default(),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                })
                .collect()
        }
    };

    let title = if state.combat_status.is_active() && !state.can_act(Side::Player) {
        " Enemy Turn... "
    } else {
        " Actions "
    };
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}
