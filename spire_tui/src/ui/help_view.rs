//! Help overlay

use super::section_title;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let combat = &app.session.config().constants.combat;
    let progression = &app.session.config().constants.progression;

    let lines = vec![
        section_title("Navigation"),
        key_line("↑/k  ↓/j", "Move selection"),
        key_line("Enter / Space", "Confirm"),
        key_line("Esc", "Close panel"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_title("Map"),
        key_line("Enter", "Travel to selected island"),
        key_line("e", "Engage an enemy on this island"),
        key_line("c / i", "Character sheet / inventory"),
        key_line("b", "Back to hero selection"),
        Line::from(""),
        section_title("Combat"),
        key_line("1-4 / Enter", "Use action"),
        key_line("r / g", "Try again / give up after defeat"),
        key_line("s", "Write combat snapshot to the log"),
        Line::from(""),
        section_title("Mechanics"),
        Line::from(format!(
            "  Your hit   = max({}, action damage + attack power - enemy defense)",
            combat.min_damage
        )),
        Line::from(format!(
            "  Enemy hit  = max({}, enemy attack power + {} - your defense)",
            combat.min_damage, combat.enemy_move_bonus
        )),
        Line::from(format!(
            "  Victory grants {} EXP; each level needs x{} more",
            combat.victory_experience, progression.exp_growth
        )),
        Line::from(format!(
            "  Level up: +{} max HP, +{} attack power, +{} stat points",
            progression.max_hp_per_level,
            progression.attack_power_per_level,
            progression.stat_points_per_level
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
