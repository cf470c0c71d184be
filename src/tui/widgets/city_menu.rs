use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::models::{City, CITIES};
use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, selected: usize, current: &City) {
    let width = area.width.clamp(20, 44).min(area.width);
    let height = (CITIES.len() as u16 + 4).min(area.height);

    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 3,
        width,
        height,
    };

    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = CITIES
        .iter()
        .enumerate()
        .map(|(i, city)| {
            let marker = if city.id == current.id { "✓" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), palette.dim()),
                Span::styled(format!("{} ", marker), palette.accent()),
                Span::raw(city.label()),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(" Select City ", palette.accent()))
        .title_bottom(Span::styled(" [Enter] select  [Esc] close ", palette.dim()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.accent())
        .style(palette.surface());

    let list = List::new(items)
        .block(block)
        .highlight_style(palette.highlight().add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, popup_area, &mut state);
}
