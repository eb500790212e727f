use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::ui::theme::Theme;

/// Horizontal inset of the command panel inside its layout slot.
const PADDING: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, command: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Command ",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(command.to_string())
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(paragraph, padded(area));
}

fn padded(area: Rect) -> Rect {
    if area.width <= PADDING * 2 + 2 {
        return area;
    }
    Rect {
        x: area.x + PADDING,
        width: area.width - PADDING * 2,
        ..area
    }
}
