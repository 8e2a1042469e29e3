//! UI module for TUI rendering.
//!
//! Every widget here is a pure projection of `Surfaces`; no UI code
//! fetches data or mutates state.

mod containers;
mod detail;
mod overview;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::domain::{App, Section};

/// Render the whole frame: tab bar, active section, footer.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(6),    // Active section
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    match app.active_section {
        Section::Overview => overview::render(frame, app, chunks[1]),
        Section::Cpu => {
            detail::render_pre(frame, " CPU Information ", &app.surfaces.cpu_detail, chunks[1])
        }
        Section::Gpu => {
            detail::render_pre(frame, " GPU Information ", &app.surfaces.gpu_detail, chunks[1])
        }
        Section::RamDisk => detail::render_ram_disk(frame, app, chunks[1]),
        Section::Lxc => containers::render(frame, app, chunks[1]),
        Section::LiveStats => detail::render_pre(
            frame,
            " Live System Stats ",
            &app.surfaces.live_stats,
            chunks[1],
        ),
    }

    render_footer(frame, chunks[2]);
}

/// Tab bar; the active section's control is the only one highlighted.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|section| Line::from(format!(" {} ", section.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_section.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)))
        .block(Block::default().borders(Borders::ALL).title(" HOSTWATCH "));

    frame.render_widget(tabs, area);
}

/// Render the footer key hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for section in Section::ALL {
        spans.push(Span::styled(
            format!(" [{}] ", section.hotkey().to_ascii_uppercase()),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(section.title()));
    }
    spans.push(Span::raw("  │ "));
    spans.push(Span::styled("[R] ", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw("Refresh All  "));
    spans.push(Span::styled("[Q] ", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw("Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
