use crate::color_scheme::{ColorScheme, ColorSchemeId};
use crate::config::NetmonConfig;
use crate::system::network::RatePair;

/// Whether the numbers on screen are current.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelStatus {
    Live,
    /// Sampling has failed `failures` ticks in a row.
    Stale { failures: u32, reason: String },
}

/// Read-only copy of the dashboard state handed to the renderer each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    /// Window contents, oldest to newest
    pub samples: Vec<RatePair>,
    pub capacity: usize,
    pub interfaces: Vec<String>,
    pub status: PanelStatus,
}

impl PanelView {
    pub fn empty(capacity: usize) -> Self {
        Self {
            samples: Vec::new(),
            capacity,
            interfaces: Vec::new(),
            status: PanelStatus::Live,
        }
    }

    pub fn latest(&self) -> Option<&RatePair> {
        self.samples.last()
    }
}

/// Terminal-side application state
pub struct App {
    pub should_quit: bool,
    /// Last view received; redrawn on resize
    pub view: PanelView,

    // Display options
    pub color_scheme_id: ColorSchemeId,
    pub color_scheme: ColorScheme,
    pub bar_width: usize,
    pub show_sidebar: bool,
}

impl App {
    pub fn new(config: &NetmonConfig) -> Self {
        Self {
            should_quit: false,
            view: PanelView::empty(config.history_size),
            color_scheme_id: config.color_scheme_id,
            color_scheme: ColorScheme::from_id(config.color_scheme_id),
            bar_width: config.bar_width,
            show_sidebar: config.show_sidebar,
        }
    }
}
