//! Modal overlays: connection logs, text prompts and alerts

use super::super::state::{DashboardState, Overlay, Prompt, PromptKind};
use super::super::utils::centered_rect;
use crate::workers::LogView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Draw whichever overlay is active; a pending alert goes on top of everything.
pub fn render_overlays(f: &mut Frame, state: &DashboardState) {
    match &state.overlay {
        Overlay::None => {}
        Overlay::Logs { view, scroll } => render_log_modal(f, view, *scroll),
        Overlay::Prompt(prompt) => render_prompt(f, prompt),
    }
    if let Some(alert) = state.current_alert() {
        render_alert(f, alert);
    }
}

fn render_log_modal(f: &mut Frame, view: &LogView, scroll: u16) {
    let area = centered_rect(80, 70, f.area());
    let lines: Vec<Line> = if view.lines.is_empty() {
        vec![Line::from("No logs")]
    } else {
        view.lines.iter().map(|line| Line::from(line.as_str())).collect()
    };

    let block = Block::default()
        .title(format!(
            "LOGS {} {}  [Esc] Close",
            view.client_id, view.summary
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightBlue))
        .padding(Padding::uniform(1));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

fn render_prompt(f: &mut Frame, prompt: &Prompt) {
    let title = match prompt.kind {
        PromptKind::Upload => "UPLOAD FILE  (path)",
        PromptKind::Add => "ADD CLIENT  (USER_ID [PROXY_URL])",
    };
    let area = centered_box(60, 3, f.area());

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(format!("{}_", prompt.input)).block(block),
        area,
    );
}

fn render_alert(f: &mut Frame, message: &str) {
    let area = centered_box(50, 5, f.area());

    let block = Block::default()
        .title("NOTICE")
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(vec![Line::from(message), Line::from("[any key] OK")])
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Box `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_box(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
