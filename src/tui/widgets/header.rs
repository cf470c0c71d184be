use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::City;
use crate::tui::theme::Palette;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    city: &City,
    clock_str: &str,
    date_str: &str,
) {
    let title_line = Line::from(vec![
        Span::styled("Prayer Times", palette.bold()),
        Span::styled("  ·  ", palette.dim()),
        Span::styled(
            city.label(),
            palette.accent().add_modifier(Modifier::BOLD),
        ),
    ]);

    let time_line = Line::from(vec![
        Span::styled("◷ ", palette.dim()),
        Span::styled(clock_str, palette.bold()),
        Span::styled("  ·  ", palette.dim()),
        Span::styled(date_str, palette.dim()),
    ]);

    let text = vec![title_line, Line::from(""), time_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.accent())
        .style(palette.surface());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
