pub mod command_panel;
pub mod graph;
pub mod theme;
pub mod view;

use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::view::View;

pub fn draw(frame: &mut Frame, view: &View, theme: &Theme) {
    #[cfg(feature = "trace-log")]
    let _draw_span = tracing::debug_span!("ui.draw", points = view.data.len()).entered();

    // A resize may land between layout and draw; never paint outside the frame.
    let area = frame.area();
    let graph_area = view.layout.graph.intersection(area);
    let command_area = view.layout.command.intersection(area);

    graph::render(
        frame,
        graph_area,
        &view.title,
        &view.data,
        view.peak_label.as_deref(),
        theme,
    );
    command_panel::render(frame, command_area, &view.command, theme);
}
