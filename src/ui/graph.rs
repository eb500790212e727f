use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Sparkline};

use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    data: &[u64],
    peak_label: Option<&str>,
    theme: &Theme,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ));

    if let Some(peak) = peak_label {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {peak} "),
                Style::default().fg(theme.text),
            ))
            .right_aligned(),
        );
    }

    let sparkline = Sparkline::default()
        .block(block)
        .data(data)
        .style(Style::default().fg(theme.line));

    frame.render_widget(sparkline, area);
}
