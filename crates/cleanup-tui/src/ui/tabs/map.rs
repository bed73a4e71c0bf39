use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::styles::Palette;

pub fn render(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(map) = app.site.map.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(20)])
        .split(area);

    let items: Vec<ListItem> = map
        .points()
        .iter()
        .map(|p| ListItem::new(format!("◉ {}", p.label)).style(palette.item()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Pollution Map ")
                .title_style(palette.muted())
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
        .highlight_style(palette.selected());

    let mut state = ListState::default();
    state.select(Some(app.map_selection));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let info = match map.info() {
        Some(text) => Line::from(Span::styled(text.to_string(), palette.info())),
        None => Line::from(Span::styled(
            "Select a location to learn how pollution affects it.",
            palette.muted(),
        )),
    };

    let paragraph = Paragraph::new(info)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[1]);
}
