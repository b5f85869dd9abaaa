//! Recursive ratatui rendering of layout fragments

use super::components::{render_button, BUTTON_HEIGHT};
use crate::render::{Fragment, Intent, Widget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Map a semantic intent to a border colour
pub fn intent_color(intent: Intent) -> Color {
    match intent {
        Intent::Neutral => Color::DarkGray,
        Intent::Success => Color::Green,
        Intent::Danger => Color::Red,
    }
}

/// Estimated height in terminal rows, used to build vertical constraints
pub fn fragment_height(fragment: &Fragment) -> u16 {
    match fragment {
        Fragment::Panel { children, .. } => {
            children.iter().map(fragment_height).sum::<u16>() + 2
        }
        Fragment::Row(children) => children.iter().map(fragment_height).max().unwrap_or(0),
        Fragment::Column(children) => children.iter().map(fragment_height).sum(),
        Fragment::LabeledControl {
            widget: Widget::TextArea { rows, .. },
            ..
        } => rows + 2,
        Fragment::LabeledControl { .. } => 3,
        Fragment::RequiredMarker => 1,
        Fragment::Button { .. } => BUTTON_HEIGHT,
        Fragment::Errors(lines) => lines.len() as u16,
        Fragment::Caption(_) => 1,
        Fragment::NavPills(_) => 1,
    }
}

/// Draw a fragment subtree into the given area
pub fn draw_fragment(frame: &mut Frame, area: Rect, fragment: &Fragment) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    match fragment {
        Fragment::Panel {
            title,
            intent,
            children,
        } => {
            let block = Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(intent_color(*intent)));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            draw_stack(frame, inner, children);
        }
        Fragment::Column(children) => draw_stack(frame, area, children),
        Fragment::Row(children) => {
            if children.is_empty() {
                return;
            }
            let constraints: Vec<Constraint> = children
                .iter()
                .map(|_| Constraint::Ratio(1, children.len() as u32))
                .collect();
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(area);
            for (child, chunk) in children.iter().zip(chunks.iter()) {
                draw_fragment(frame, *chunk, child);
            }
        }
        Fragment::LabeledControl { label, widget } => draw_control(frame, area, label, widget),
        Fragment::RequiredMarker => {
            let marker = Paragraph::new("* required").style(Style::default().fg(Color::Red));
            frame.render_widget(marker, area);
        }
        Fragment::Button { caption, intent } => {
            render_button(frame, area, caption, intent_color(*intent));
        }
        Fragment::Errors(lines) => {
            let text: Vec<Line> = lines
                .iter()
                .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Red))))
                .collect();
            frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
        }
        Fragment::Caption(text) => {
            let caption = Paragraph::new(text.as_str()).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(caption, area);
        }
        Fragment::NavPills(captions) => {
            let mut spans = Vec::new();
            for caption in captions {
                spans.push(Span::styled(
                    format!(" {caption} "),
                    Style::default().bg(Color::DarkGray).fg(Color::White),
                ));
                spans.push(Span::raw(" "));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), area);
        }
    }
}

/// Stack children vertically, sized by their estimated heights
fn draw_stack(frame: &mut Frame, area: Rect, children: &[Fragment]) {
    if children.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = children
        .iter()
        .map(|child| Constraint::Length(fragment_height(child)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    for (child, chunk) in children.iter().zip(chunks.iter()) {
        draw_fragment(frame, *chunk, child);
    }
}

fn draw_control(frame: &mut Frame, area: Rect, label: &Option<String>, widget: &Widget) {
    let block = match label {
        Some(label) => Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        None => Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    };

    let content = match widget {
        Widget::Input { value } => Paragraph::new(value.as_str()),
        Widget::TextArea { value, .. } => {
            let lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
            Paragraph::new(lines).wrap(Wrap { trim: false })
        }
        Widget::Checkbox { checked } => {
            Paragraph::new(if *checked { "[x]" } else { "[ ]" })
        }
        Widget::Select { selected, options } => {
            let swatch = options
                .iter()
                .find(|o| &o.value == selected)
                .and_then(|o| o.swatch.as_deref())
                .and_then(hex_color);
            let mut spans = Vec::new();
            if let Some(color) = swatch {
                spans.push(Span::styled("■ ", Style::default().fg(color)));
            }
            let display = options
                .iter()
                .find(|o| &o.value == selected)
                .map(|o| o.label.as_str())
                .unwrap_or(selected.as_str());
            spans.push(Span::raw(display.to_string()));
            spans.push(Span::styled(" ▾", Style::default().fg(Color::DarkGray)));
            Paragraph::new(Line::from(spans))
        }
    };

    frame.render_widget(content.block(block), area);
}

/// Parse a `#rrggbb` colour into a terminal colour
fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fragment::{TEXT_AREA_COLS, TEXT_AREA_ROWS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_color_parses_palette_entry() {
        assert_eq!(hex_color("#1f77b4"), Some(Color::Rgb(0x1f, 0x77, 0xb4)));
    }

    #[test]
    fn test_hex_color_rejects_garbage() {
        assert_eq!(hex_color("1f77b4"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
        assert_eq!(hex_color("#fff"), None);
    }

    #[test]
    fn test_text_area_height_uses_geometry_hint() {
        let fragment = Fragment::LabeledControl {
            label: Some("Description".to_string()),
            widget: Widget::TextArea {
                value: String::new(),
                cols: TEXT_AREA_COLS,
                rows: TEXT_AREA_ROWS,
            },
        };
        assert_eq!(fragment_height(&fragment), TEXT_AREA_ROWS + 2);
    }

    #[test]
    fn test_panel_height_wraps_children() {
        let panel = Fragment::Panel {
            title: "File Options".to_string(),
            intent: Intent::Success,
            children: vec![Fragment::Caption("File: data.csv".to_string())],
        };
        assert_eq!(fragment_height(&panel), 3);
    }

    #[test]
    fn test_row_height_is_tallest_child() {
        let row = Fragment::Row(vec![
            Fragment::Caption("a".to_string()),
            Fragment::Button {
                caption: "Remove".to_string(),
                intent: Intent::Danger,
            },
        ]);
        assert_eq!(fragment_height(&row), BUTTON_HEIGHT);
    }
}
