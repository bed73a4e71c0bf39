use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use cleanup_core::components::EventsView;
use cleanup_core::utils::truncate_string;

use crate::app::App;
use crate::ui::styles::Palette;

pub fn render(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(catalog) = app.site.events.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(format!(" Upcoming Cleanups ({}) ", catalog.filter().label()))
        .title_style(palette.muted())
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    match catalog.view() {
        EventsView::NoResults(message) => {
            let paragraph = Paragraph::new(Line::from(Span::styled(*message, palette.muted())))
                .block(block);
            frame.render_widget(paragraph, area);
        }
        EventsView::Cards(cards) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(area);

            let header = Row::new(vec![Cell::from("Event"), Cell::from("When")])
                .style(palette.title())
                .height(1);

            let rows: Vec<Row> = cards
                .iter()
                .enumerate()
                .map(|(i, card)| {
                    let style = if i == app.event_selection {
                        palette.selected()
                    } else {
                        palette.item()
                    };
                    Row::new(vec![
                        Cell::from(truncate_string(&card.title, 34)),
                        Cell::from(card.when.clone()),
                    ])
                    .style(style)
                })
                .collect();

            let widths = [Constraint::Percentage(50), Constraint::Fill(1)];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(palette.selected());

            let mut state = TableState::default();
            state.select(Some(app.event_selection));
            frame.render_stateful_widget(table, chunks[0], &mut state);

            render_card(frame, app, chunks[1], palette);
        }
    }
}

fn render_card(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let card = app
        .site
        .events
        .as_ref()
        .and_then(|c| c.view().cards().get(app.event_selection));

    let content = match card {
        Some(card) => vec![
            Line::from(Span::styled(card.title.clone(), palette.title())),
            Line::from(""),
            Line::from(Span::styled(card.when.clone(), palette.muted())),
            Line::from(Span::styled(card.location.clone(), palette.muted())),
            Line::from(""),
            Line::from(Span::styled(card.description.clone(), palette.item())),
            Line::from(""),
            Line::from(Span::styled("[Enter] Sign Up", palette.help_key())),
        ],
        None => vec![Line::from(Span::styled("No event selected", palette.muted()))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
