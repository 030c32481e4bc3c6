pub mod footer;
pub mod header;
pub mod sidebar;
pub mod traffic;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::app::App;

/// Render the complete UI
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();
    f.render_widget(Block::default().style(Style::default().bg(app.color_scheme.bg)), size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header (title + clock)
            Constraint::Min(3),    // body
            Constraint::Length(1), // footer (key bar)
        ])
        .split(size);

    header::draw_header(f, app, rows[0]);

    if app.show_sidebar {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar::SIDEBAR_WIDTH), Constraint::Min(10)])
            .split(rows[1]);
        sidebar::draw_sidebar(f, app, cols[0]);
        traffic::draw_traffic_panel(f, app, cols[1]);
    } else {
        traffic::draw_traffic_panel(f, app, rows[1]);
    }

    footer::draw_footer(f, app, rows[2]);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::PanelStatus;
    use crate::config::NetmonConfig;
    use crate::system::network::RatePair;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn empty_window_shows_placeholders() {
        let app = App::new(&NetmonConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Live Traffic"));
        assert!(screen.contains("RX: 0"));
        assert!(screen.contains("TX: 0"));
        assert!(!screen.contains('█'));
        assert!(screen.contains("history 0/60"));
    }

    #[test]
    fn full_window_draws_full_bars_and_latest_rate() {
        let mut app = App::new(&NetmonConfig::default());
        app.view.samples = vec![RatePair::new(1_000_000.0, 125_000.0); 60];
        app.view.interfaces = vec!["eth0".into(), "wlan0".into()];

        let screen = render(&app);
        assert!(screen.contains("RX:   8.00 Mbps"));
        assert!(screen.contains("TX:   1.00 Mbps"));
        assert!(screen.contains(&"█".repeat(30)));
        assert!(!screen.contains(&"█".repeat(31)));
        assert!(screen.contains("wlan0"));
    }

    #[test]
    fn stale_status_is_visible() {
        let mut app = App::new(&NetmonConfig::default());
        app.show_sidebar = false;
        app.view.status = PanelStatus::Stale { failures: 3, reason: "no counters".into() };

        let screen = render(&app);
        assert!(screen.contains("Sampling failed 3 times in a row: no counters"));
    }
}
