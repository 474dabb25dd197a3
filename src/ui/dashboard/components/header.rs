//! Dashboard header component
//!
//! Renders the title and the connection counters

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title, server and online/all counters.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("PROXY DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
    let refreshed = match &state.last_refresh {
        Some(at) => at.clone(),
        None => format!("waiting {}", SPINNER[(state.tick / 2) % SPINNER.len()]),
    };
    let uptime = state.start_time.elapsed().as_secs();
    let counters = Line::from(vec![
        Span::styled(
            format!("Server: {}", state.server_url),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Online: {}", state.table.online),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("All: {}", state.table.total),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Refreshed: {}", refreshed),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!(
                "Up: {:02}:{:02}:{:02}",
                uptime / 3600,
                (uptime % 3600) / 60,
                uptime % 60
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let counters = Paragraph::new(counters).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(counters, header_chunks[1]);
}
