//! Container card rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::containers::{ContainerCard, ContainerFragment, DeviceSection};
use crate::domain::App;

/// Render the container view: a stack of cards (or a single note) inside
/// the section block.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for fragment in &app.surfaces.containers {
        match fragment {
            ContainerFragment::Note(text) => {
                for row in text.lines() {
                    lines.push(Line::from(format!(" {}", row)));
                }
                lines.push(Line::from(""));
            }
            ContainerFragment::Card(card) => push_card(&mut lines, card),
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" LXC Container Information ")
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn push_card<'a>(lines: &mut Vec<Line<'a>>, card: &'a ContainerCard) {
    lines.push(Line::from(Span::styled(
        format!(" {}", card.title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(field_line("Owner", &card.owner));
    lines.push(field_line("IPv4", &card.ipv4));
    lines.push(field_line("IPv6", &card.ipv6));
    lines.push(Line::from(vec![
        Span::styled("   Memory Usage: ", Style::default().fg(Color::DarkGray)),
        Span::raw(card.memory_mb.as_str()),
        Span::raw(" MB"),
    ]));

    push_device_section(lines, "Disk Devices", &card.disks);
    push_device_section(lines, "GPU Devices", &card.gpus);
    lines.push(Line::from(""));
}

fn field_line<'a>(label: &'static str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("   {}: ", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

fn push_device_section<'a>(
    lines: &mut Vec<Line<'a>>,
    label: &'static str,
    section: &'a DeviceSection,
) {
    lines.push(Line::from(Span::styled(
        format!("   {}:", label),
        Style::default().fg(Color::Yellow),
    )));
    match section {
        DeviceSection::Items(items) => {
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled("     • ", Style::default().fg(Color::DarkGray)),
                    Span::raw(item.as_str()),
                ]));
            }
        }
        DeviceSection::Note(text) => {
            lines.push(Line::from(Span::styled(
                format!("     {}", text),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
}
