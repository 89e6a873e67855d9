//! Character selection view

use super::{section_title, stat_line};
use crate::app::App;
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
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_hero_list(f, app, chunks[0]);
    draw_hero_details(f, app, chunks[1]);
}

fn draw_hero_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .config()
        .heroes
        .iter()
        .enumerate()
        .map(|(i, hero)| {
            let selected = i == app.selected_hero;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", marker, hero.name), style),
                Span::styled(
                    format!("  {}", hero.role.as_deref().unwrap_or("")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Choose Your Champion "),
    );
    f.render_widget(list, area);
}

fn draw_hero_details(f: &mut Frame, app: &App, area: Rect) {
    let Some(hero) = app.session.config().heroes.get(app.selected_hero) else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            hero.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hero.description.clone().unwrap_or_default(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        section_title("Combat"),
        stat_line("HP", hero.max_hp),
        stat_line("Attack Power", hero.attack_power),
        stat_line("Defense", hero.defense),
    ];

    if let Some(stats) = &hero.stats {
        lines.push(Line::from(""));
        lines.push(section_title("Attributes"));
        lines.push(stat_line("Strength", stats.strength));
        lines.push(stat_line("Agility", stats.agility));
        lines.push(stat_line("Magic", stats.magic));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Hero "))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
