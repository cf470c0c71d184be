use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::FetchState;
use crate::tui::theme::Palette;
use crate::utils::format::truncate_to_width;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, fetch: &FetchState) {
    let hints = [
        ("[c]", " city  "),
        ("[1-4]", " quick city  "),
        ("[r]", " refresh  "),
        ("[t]", " theme  "),
        ("[q]", " quit"),
    ];

    let line = match fetch {
        FetchState::Failed { reason } => {
            let msg = format!("✗ fetch failed: {}", reason);
            Line::from(Span::styled(
                truncate_to_width(&msg, area.width as usize),
                palette.error(),
            ))
        }
        _ => {
            let mut spans = Vec::new();
            for (key, label) in &hints {
                spans.push(Span::styled(*key, palette.accent()));
                spans.push(Span::styled(*label, palette.dim()));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(palette.base());
    frame.render_widget(paragraph, area);
}
