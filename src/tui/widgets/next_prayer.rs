use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::prayer_times::NextPrayer;
use crate::tui::app::FetchState;
use crate::tui::theme::Palette;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    next: Option<&NextPrayer>,
    fetch: &FetchState,
    stale: bool,
) {
    let title = if stale {
        Line::from(vec![
            Span::styled(" Next Prayer ", palette.accent()),
            Span::styled("(stale) ", palette.error()),
        ])
    } else {
        Line::from(Span::styled(" Next Prayer ", palette.accent()))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .style(palette.surface());

    let content: Vec<Line> = match (next, fetch) {
        (Some(next), _) => vec![
            Line::from(""),
            Line::from(Span::styled(
                next.info.name.display_name().to_uppercase(),
                palette.accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(next.info.time.as_str(), palette.bold())),
            Line::from(""),
            Line::from(vec![
                Span::styled("in  ", palette.dim()),
                Span::styled(
                    next.remaining.to_string(),
                    palette.accent().add_modifier(Modifier::BOLD),
                ),
            ]),
        ],
        (None, FetchState::Loading) => vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("Loading…", palette.dim())),
        ],
        (None, _) => vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("No data", palette.dim())),
        ],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
