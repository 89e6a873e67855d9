//! Character sheet overlay

use super::{progress_bar, section_title, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use spire_core::{Character, StatKind};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Character Sheet ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(player) = app.player() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Identity
            Constraint::Length(1), // Exp bar
            Constraint::Min(0),    // Stats
        ])
        .split(inner);

    let identity = vec![
        Line::from(Span::styled(
            player.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{}  Level {}",
            player.role.as_deref().unwrap_or("Adventurer"),
            player.level
        )),
        Line::from(Span::styled(
            format!(
                "EXP {}/{} ({:.0}%)",
                player.experience,
                player.exp_to_next_level,
                player.exp_percent()
            ),
            Style::default().fg(Color::Magenta),
        )),
    ];
    f.render_widget(Paragraph::new(identity), chunks[0]);
    f.render_widget(
        progress_bar(player.experience, player.exp_to_next_level, chunks[1].width, Color::Magenta),
        chunks[1],
    );

    f.render_widget(Paragraph::new(stat_lines(app, player)), chunks[2]);
}

fn stat_lines(app: &App, player: &Character) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        section_title("Combat Stats"),
        Line::from(Span::styled(
            format!("Stat points available: {}", player.stat_points),
            Style::default().fg(if player.stat_points > 0 {
                Color::Green
            } else {
                Color::DarkGray
            }),
        )),
    ];

    for (i, stat) in StatKind::all().iter().enumerate() {
        let value = match stat {
            StatKind::AttackPower => player.attack_power.to_string(),
            StatKind::Defense => player.defense.to_string(),
            StatKind::MaxHp => format!("{}/{}", player.current_hp, player.max_hp),
        };
        let marker = if i == app.selected_stat { "▶" } else { " " };
        let mut line = stat_line(&format!("{} [{}] {}", marker, i + 1, stat.name()), value);
        if player.stat_points > 0 {
            line.spans.push(Span::styled("  [+]", Style::default().fg(Color::Green)));
        }
        lines.push(line);
    }

    if let Some(stats) = &player.stats {
        lines.push(Line::from(""));
        lines.push(section_title("Attributes"));
        lines.push(stat_line("Strength", stats.strength));
        lines.push(stat_line("Agility", stats.agility));
        lines.push(stat_line("Magic", stats.magic));
    }

    lines
}
