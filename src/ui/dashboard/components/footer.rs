//! Dashboard footer component
//!
//! Renders footer with key bindings

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with key help.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer_text =
        "[↑↓] Select | [Enter] Logs | [d] Delete | [D] Delete all | [u] Upload | [a] Add | [r] Refresh | [Q] Quit";

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
