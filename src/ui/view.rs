//! Frame description built from the monitor's state on every redraw.
//!
//! Nothing here reads the system or the terminal; the renderer in
//! [`crate::ui::draw`] turns a [`View`] into widgets.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::format::{format_bytes, truncate_unicode};

/// Screen split: the graph takes the top two thirds, the command panel the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub graph: Rect,
    pub command: Rect,
}

impl PanelLayout {
    pub fn for_size(width: u16, height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(2, 3), Constraint::Fill(1)])
            .split(Rect::new(0, 0, width, height));

        PanelLayout {
            graph: chunks[0],
            command: chunks[1],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: String,
    /// Bars for the graph, oldest to newest.
    pub data: Vec<u64>,
    pub peak_label: Option<String>,
    pub command: String,
    pub layout: PanelLayout,
}

impl View {
    pub fn build(
        values: &[f64],
        title: &str,
        command: &str,
        peak: Option<f64>,
        layout: PanelLayout,
    ) -> Self {
        // Borders take one column on each side.
        let visible = usize::from(layout.graph.width.saturating_sub(2));
        let skip = values.len().saturating_sub(visible);
        let data = values[skip..].iter().map(|v| v.round() as u64).collect();

        let title_width = usize::from(layout.graph.width.saturating_sub(4));
        let title = truncate_unicode(title, title_width);

        View {
            title,
            data,
            peak_label: peak.map(|p| format!("peak {}", format_bytes(p.round() as u64))),
            command: command.to_string(),
            layout,
        }
    }
}
