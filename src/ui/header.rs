use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;

const TITLE: &str = " netmon: live network traffic";

/// Title bar with a wall clock on the right: " netmon: live network traffic      14:02:17 "
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let cs = &app.color_scheme;
    let style = Style::default().fg(cs.header_fg).bg(cs.header_bg);

    let clock = format!("{} ", Local::now().format("%H:%M:%S"));
    let used = TITLE.chars().count() + clock.len();
    let pad = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(TITLE, style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".repeat(pad), style),
        Span::styled(clock, style),
    ]);
    f.render_widget(Paragraph::new(line).style(style), area);
}
