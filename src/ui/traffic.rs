use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, PanelStatus, PanelView};
use crate::system::network::Direction;

/// Width of the numeric rate column, e.g. "  8.00 Mbps"
const RATE_COLUMN_WIDTH: usize = 11;

const BAR_CHAR: &str = "█";

/// Format bytes/sec as megabits/sec with two decimals: 1_000_000 -> "8.00 Mbps"
pub fn format_mbps(bytes_per_sec: f64) -> String {
    format!("{:.2} Mbps", bytes_per_sec * 8.0 / 1_000_000.0)
}

/// Bar length for a window holding `count` of `capacity` samples.
///
/// This is a fill-level indicator: it grows with the amount of history
/// collected, not with the rate.
pub fn bar_length(count: usize, capacity: usize, max_width: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    count.min(capacity) * max_width / capacity
}

/// "RX:   8.00 Mbps", or "RX: 0" before the first sample.
pub fn rate_line(direction: Direction, view: &PanelView) -> String {
    match view.latest() {
        Some(pair) => format!(
            "{}: {:>width$}",
            direction.label(),
            format_mbps(direction.rate(pair)),
            width = RATE_COLUMN_WIDTH
        ),
        None => format!("{}: 0", direction.label()),
    }
}

/// Draw the "Network" panel:
///
///   Live Traffic
///   RX ██████████
///   TX ██████████
///   RX:   8.00 Mbps
///   TX:   0.42 Mbps
pub fn draw_traffic_panel(f: &mut Frame, app: &App, area: Rect) {
    let cs = &app.color_scheme;
    let view = &app.view;
    let filled = bar_length(view.samples.len(), view.capacity, app.bar_width);

    let bar = |direction: Direction, color: Color| {
        Line::from(vec![
            Span::raw(format!("{} ", direction.label())),
            Span::styled(BAR_CHAR.repeat(filled), Style::default().fg(color)),
        ])
    };
    let text = Style::default().fg(cs.rate_text);

    let mut lines = vec![
        Line::from(Span::styled("Live Traffic", cs.title_style())),
        bar(Direction::Rx, cs.rx_bar),
        bar(Direction::Tx, cs.tx_bar),
        Line::from(Span::styled(rate_line(Direction::Rx, view), text)),
        Line::from(Span::styled(rate_line(Direction::Tx, view), text)),
    ];

    if let PanelStatus::Stale { failures, reason } = &view.status {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Sampling failed {failures} times in a row: {reason}"),
            Style::default().fg(cs.stale_text).add_modifier(Modifier::BOLD),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Network", cs.title_style()))
        .border_style(Style::default().fg(cs.panel_border));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
