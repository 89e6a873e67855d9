//! World map view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(40)])
        .split(area);

    draw_map(f, app, chunks[0]);
    draw_island_panel(f, app, chunks[1]);
}

/// Plot islands at their percentage coordinates
fn draw_map(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" The Floating Realms ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let game = app.session.game();
    for (i, island) in app.session.config().world.islands().iter().enumerate() {
        let x = inner.x + (inner.width.saturating_sub(1) as u32 * island.x.min(100) as u32 / 100) as u16;
        let y = inner.y + (inner.height.saturating_sub(1) as u32 * island.y.min(100) as u32 / 100) as u16;

        let here = island.name == game.current_island;
        let heading = game.destination.as_deref() == Some(island.name.as_str());
        let (glyph, color) = if here {
            ("◆", Color::Yellow)
        } else if heading {
            ("◇", Color::LightCyan)
        } else {
            ("○", Color::Gray)
        };
        let mut style = Style::default().fg(color);
        if i == app.selected_island {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let label = format!("{} {}", glyph, island.name);
        let max_width = (inner.x + inner.width).saturating_sub(x);
        let label: String = label.chars().take(max_width as usize).collect();
        f.render_widget(
            Paragraph::new(Span::styled(label, style)),
            Rect::new(x, y, max_width, 1),
        );
    }
}

fn draw_island_panel(f: &mut Frame, app: &App, area: Rect) {
    let world = &app.session.config().world;
    let game = app.session.game();

    let mut lines = vec![Line::from(vec![
        Span::styled("Location: ", Style::default().fg(Color::Gray)),
        Span::styled(
            game.current_island.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(destination) = &game.destination {
        lines.push(Line::from(Span::styled(
            format!("Travelling to {}...", destination),
            Style::default().fg(Color::LightCyan),
        )));
    }

    if let Some(island) = world.islands().get(app.selected_island) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            island.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            island.flavor().to_string(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Known threats:",
            Style::default().fg(Color::Red),
        )));
        for enemy in world.roster(&island.name) {
            lines.push(Line::from(format!("  {} (Lv.{})", enemy.name, enemy.level)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Island "))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
