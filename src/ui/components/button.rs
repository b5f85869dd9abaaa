//! Button component for the TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button tinted with the given colour
pub fn render_button(frame: &mut Frame, area: Rect, caption: &str, color: Color) {
    let paragraph = Paragraph::new(format!(" {caption} "))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(paragraph.block(block), area);
}
