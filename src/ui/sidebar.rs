use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;

/// Width of the interface list, borders included
pub const SIDEBAR_WIDTH: u16 = 20;

/// List the interfaces whose counters feed the totals.
pub fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let cs = &app.color_scheme;
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line> = if app.view.interfaces.is_empty() {
        vec![Line::from("(none)")]
    } else {
        app.view
            .interfaces
            .iter()
            .map(|name| Line::from(truncate_to_width(name, inner_width)))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Interfaces")
        .border_style(Style::default().fg(cs.panel_border));

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(cs.sidebar_fg))
            .block(block),
        area,
    );
}

/// Cut `s` to at most `max` display columns, marking the cut with '…'.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
