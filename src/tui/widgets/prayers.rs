use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::models::{PrayerEntry, PrayerName};
use crate::tui::theme::Palette;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    entries: &[PrayerEntry],
    next: Option<PrayerName>,
    source_date: Option<&str>,
    loading: bool,
) {
    let title = match source_date {
        Some(date) => format!(" Timings · {} ", date),
        None => " Timings ".to_string(),
    };

    let block = Block::default()
        .title(Span::styled(title, palette.accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .style(palette.surface());

    if entries.is_empty() {
        let msg = if loading { "  Loading…" } else { "  No timings" };
        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(msg, palette.dim()))])
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec!["  Prayer", "Time", ""]).style(palette.table_header());

    let rows: Vec<Row> = entries
        .iter()
        .map(|e| {
            let is_next = next == Some(e.name);
            let marker = if is_next { "●" } else { "○" };
            let marker_style = if is_next { palette.accent() } else { palette.dim() };

            let name = Line::from(vec![
                Span::styled(format!("  {} ", marker), marker_style),
                Span::styled(
                    e.name.display_name(),
                    if is_next {
                        palette.bold()
                    } else {
                        palette.surface()
                    },
                ),
            ]);

            let badge = if is_next {
                Span::styled(" Next ", palette.accent().add_modifier(Modifier::REVERSED))
            } else {
                Span::raw("")
            };

            let row = Row::new(vec![
                name,
                Line::from(Span::raw(e.label.clone())),
                Line::from(badge),
            ]);
            if is_next {
                row.style(palette.highlight())
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Length(10),
            Constraint::Min(6),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
