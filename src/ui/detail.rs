//! Detail surfaces: full feed dumps rendered as preformatted text.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::App;

/// Render one preformatted text surface inside a titled block.
pub fn render_pre(frame: &mut Frame, title: &'static str, text: &str, area: Rect) {
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// RAM and disk share one endpoint but render to independent surfaces.
pub fn render_ram_disk(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_pre(frame, " RAM Information ", &app.surfaces.ram_detail, chunks[0]);
    render_pre(frame, " Disk Information ", &app.surfaces.disk_detail, chunks[1]);
}
