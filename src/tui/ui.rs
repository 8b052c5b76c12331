// UI rendering logic
//
// The detail screen is three stacked areas: a header with the status badge
// and timing lines, a scrollable body with every section, and a one-line
// footer with key hints and the newest log line.

use super::app::App;
use crate::detail::DetailView;
use crate::logging::LogLevel;
use crate::sections::SectionBody;
use crate::util::{single_line, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEY_HINTS: &str = " s share · y copy url · c copy body · ↑↓←→ scroll · q back ";

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Badge + timing
            Constraint::Min(3),    // Sections
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let lines = match &app.view {
        Some(view) => {
            render_header(f, chunks[0], app, view);
            Some(section_lines(view))
        }
        None => None,
    };

    match lines {
        Some(lines) => render_body(f, chunks[1], app, lines),
        None => {
            let empty = Paragraph::new("No details for this record")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, chunks[1]);
        }
    }

    render_footer(f, chunks[2], app);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App, view: &DetailView) {
    let badge_color = app.palette.color(view.badge.color);
    let badge_style = Style::default()
        .bg(badge_color)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", view.badge.label), badge_style),
            Span::raw("  "),
            Span::styled(
                view.header.primary.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!(" {} ", view.badge.sub_label), badge_style),
            Span::raw("  "),
            Span::styled(
                view.header.secondary.clone(),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(badge_color)),
    );
    f.render_widget(header, area);
}

/// Flatten sections into display lines
fn section_lines(view: &DetailView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, section) in view.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            section.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        match &section.body {
            SectionBody::Rows(rows) => {
                for row in rows {
                    let mut spans = vec![
                        Span::styled(
                            format!("  {}: ", row.label),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::raw(single_line(&row.value)),
                    ];
                    if row.copyable {
                        spans.push(Span::styled(" ⧉", Style::default().fg(Color::DarkGray)));
                    }
                    lines.push(Line::from(spans));
                }
            }
            SectionBody::Text { text, .. } => {
                for line in text.lines() {
                    lines.push(Line::from(format!("  {}", line)));
                }
            }
        }
    }

    lines
}

fn render_body(f: &mut Frame, area: Rect, app: &mut App, lines: Vec<Line<'static>>) {
    // Borders take two rows
    let viewport = area.height.saturating_sub(2) as usize;
    app.scroll.update_dimensions(lines.len(), viewport);

    let title = if app.scroll.overflows() {
        format!(" Details ({}/{}) ", app.scroll.offset() + 1, lines.len())
    } else {
        " Details ".to_string()
    };

    let offset = u16::try_from(app.scroll.offset()).unwrap_or(u16::MAX);
    let horizontal = u16::try_from(app.scroll.horizontal_offset()).unwrap_or(u16::MAX);

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((offset, horizontal));
    f.render_widget(body, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        KEY_HINTS,
        Style::default().fg(Color::Black).bg(Color::DarkGray),
    )];

    if let Some(entry) = app.log_buffer.as_ref().and_then(|b| b.latest()) {
        let color = match entry.level {
            LogLevel::Error => Color::Red,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Info => Color::Green,
            LogLevel::Debug | LogLevel::Trace => Color::DarkGray,
        };
        let room = (area.width as usize).saturating_sub(KEY_HINTS.chars().count() + 1);
        let text = format!("{} {}", entry.level.as_str(), single_line(&entry.message));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            truncate_to_width(&text, room),
            Style::default().fg(color),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::record::LogRecord;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_badge_and_sections() {
        let record = LogRecord::classify(&json!({
            "method": "POST",
            "url": "https://example.com/login",
            "status": 404,
            "startTime": 0,
            "endTime": 35
        }));
        let mut app = App::new(record, &Config::default());
        let screen = render(&mut app);

        assert!(screen.contains("POST"));
        assert!(screen.contains("404"));
        assert!(screen.contains("Duration 35ms"));
        assert!(screen.contains("GENERAL"));
        assert!(screen.contains("url: https://example.com/login"));
        assert!(screen.contains("RESPONSE HEADERS"));
    }

    #[test]
    fn test_renders_unknown_record() {
        let mut app = App::new(LogRecord::Unknown, &Config::default());
        let screen = render(&mut app);
        assert!(screen.contains("No details for this record"));
    }
}
