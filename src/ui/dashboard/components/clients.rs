//! Client table component

use super::super::state::DashboardState;
use super::super::utils::get_status_color;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

pub fn render_clients_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("CLIENTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.table.is_empty() {
        let empty = Paragraph::new("No clients").block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = state
        .table
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.seq.to_string()),
                Cell::from(Span::styled(
                    row.user_id.as_str(),
                    Style::default().fg(Color::White),
                )),
                Cell::from(Span::styled(
                    row.proxy_url.as_str(),
                    Style::default().fg(Color::Gray),
                )),
                Cell::from(Span::styled(
                    row.status_text(),
                    Style::default().fg(get_status_color(row.status)),
                )),
                Cell::from(Span::styled(
                    row.id.as_str(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let header_style = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(16),
            Constraint::Min(24),
            Constraint::Length(8),
            Constraint::Length(38),
        ],
    )
    .header(
        Row::new(vec!["#", "USER ID", "PROXY", "STATUS", "ID"])
            .style(header_style)
            .bottom_margin(1),
    )
    .block(block)
    .row_highlight_style(Style::default().bg(Color::Rgb(40, 48, 56)))
    .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}
