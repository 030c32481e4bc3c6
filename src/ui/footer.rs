use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;

/// Key bar: (key_label, description)
const KEYS: &[(&str, &str)] = &[("q", "Quit  "), ("Esc", "Quit  "), ("F10", "Quit ")];

/// Draw the bottom key bar followed by the history fill, e.g. "history 12/60"
pub fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let cs = &app.color_scheme;

    // Full-width background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(cs.footer_label_bg)),
        area,
    );

    let label = Style::default().fg(cs.footer_label_fg).bg(cs.footer_label_bg);
    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in KEYS {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(cs.footer_key_fg)
                .bg(cs.footer_key_bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(*desc, label));
    }
    spans.push(Span::styled(
        format!(" history {}/{}", app.view.samples.len(), app.view.capacity),
        label,
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
