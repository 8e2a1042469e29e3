//! Overview rendering: one condensed panel per feed summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

/// Render the overview: compute summary on top, RAM and disk side by side,
/// refresh timestamp at the bottom.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Compute (CPU, or GPU when present)
            Constraint::Min(6),    // RAM + Disk
            Constraint::Length(3), // Timestamp
        ])
        .split(area);

    render_panel(
        frame,
        " COMPUTE ",
        &app.surfaces.overview_compute,
        Color::Blue,
        chunks[0],
    );

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_panel(frame, " RAM ", &app.surfaces.overview_ram, Color::Magenta, halves[0]);
    render_panel(frame, " DISK ", &app.surfaces.overview_disk, Color::Green, halves[1]);

    render_timestamp(frame, app, chunks[2]);
}

fn render_panel(frame: &mut Frame, title: &'static str, text: &str, color: Color, area: Rect) {
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_timestamp(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.surfaces.timestamp.is_empty() {
        Line::from(Span::styled(
            " Not refreshed yet",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(" Last refreshed: "),
            Span::styled(
                app.surfaces.timestamp.as_str(),
                Style::default().fg(Color::Cyan),
            ),
        ])
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
