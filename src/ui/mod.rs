//! UI module for rendering the TUI

mod components;
mod fragment;

pub use fragment::{draw_fragment, fragment_height, intent_color};

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Document form
            Constraint::Length(1), // Footer actions
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    match app.fragment_tree() {
        Ok(tree) => draw_fragment(frame, chunks[1], &tree),
        Err(err) => {
            let message = Paragraph::new(format!("render contract violation: {err}"))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(message, chunks[1]);
        }
    }

    draw_fragment(frame, chunks[2], &app.footer_tree());
    draw_status_bar(frame, chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let header = Paragraph::new(format!(" Visualiser: compose a {} document", app.kind.tag()))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(header, area);
}

fn draw_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let hints = if app.is_empty {
        " u:submit file  m:chart/map  q:quit"
    } else {
        " a:add layer  x:remove layer  m:chart/map  e:demo errors  q:quit"
    };
    let status = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
