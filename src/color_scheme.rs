use ratatui::style::{Color, Modifier, Style};

/// Selectable color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSchemeId {
    Default = 0,
    Monochrome = 1,
    BlackNight = 2,
}

impl ColorSchemeId {
    pub fn name(&self) -> &'static str {
        match self {
            ColorSchemeId::Default => "Default",
            ColorSchemeId::Monochrome => "Monochrome",
            ColorSchemeId::BlackNight => "Black Night",
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            1 => ColorSchemeId::Monochrome,
            2 => ColorSchemeId::BlackNight,
            _ => ColorSchemeId::Default,
        }
    }
}

/// Color slots used by the dashboard
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub bg: Color,

    // Header / footer chrome
    pub header_fg: Color,
    pub header_bg: Color,
    pub footer_key_fg: Color,
    pub footer_key_bg: Color,
    pub footer_label_fg: Color,
    pub footer_label_bg: Color,

    // Traffic panel
    pub panel_border: Color,
    pub panel_title: Color,
    pub rx_bar: Color,
    pub tx_bar: Color,
    pub rate_text: Color,
    pub stale_text: Color,

    // Sidebar
    pub sidebar_fg: Color,
}

impl ColorScheme {
    pub fn from_id(id: ColorSchemeId) -> Self {
        match id {
            ColorSchemeId::Default => Self::default_scheme(),
            ColorSchemeId::Monochrome => Self::monochrome(),
            ColorSchemeId::BlackNight => Self::black_night(),
        }
    }

    /// Cyan panel on black, green RX, red TX
    fn default_scheme() -> Self {
        Self {
            bg: Color::Black,
            header_fg: Color::Black,
            header_bg: Color::Cyan,
            footer_key_fg: Color::Black,
            footer_key_bg: Color::Cyan,
            footer_label_fg: Color::Indexed(252),
            footer_label_bg: Color::Indexed(234),
            panel_border: Color::Cyan,
            panel_title: Color::Cyan,
            rx_bar: Color::Green,
            tx_bar: Color::Red,
            rate_text: Color::White,
            stale_text: Color::Yellow,
            sidebar_fg: Color::Indexed(252),
        }
    }

    fn monochrome() -> Self {
        Self {
            bg: Color::Reset,
            header_fg: Color::Black,
            header_bg: Color::White,
            footer_key_fg: Color::Black,
            footer_key_bg: Color::White,
            footer_label_fg: Color::White,
            footer_label_bg: Color::Reset,
            panel_border: Color::White,
            panel_title: Color::White,
            rx_bar: Color::White,
            tx_bar: Color::Gray,
            rate_text: Color::White,
            stale_text: Color::White,
            sidebar_fg: Color::Gray,
        }
    }

    fn black_night() -> Self {
        Self {
            bg: Color::Black,
            header_fg: Color::White,
            header_bg: Color::Indexed(236),
            footer_key_fg: Color::Black,
            footer_key_bg: Color::Indexed(37),
            footer_label_fg: Color::Indexed(250),
            footer_label_bg: Color::Black,
            panel_border: Color::Indexed(37),
            panel_title: Color::Indexed(51),
            rx_bar: Color::Indexed(46),
            tx_bar: Color::Indexed(196),
            rate_text: Color::Indexed(252),
            stale_text: Color::Indexed(214),
            sidebar_fg: Color::Indexed(245),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.panel_title).add_modifier(Modifier::BOLD)
    }
}
