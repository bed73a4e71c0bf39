use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, AppState, ReportField};
use crate::ui::styles::Palette;

use super::{button_line, field_line};

pub fn render(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(report) = app.site.report.as_ref() else {
        return;
    };
    let editing = app.state == AppState::Editing;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(area);

    let form = vec![
        Line::from(""),
        field_line(
            "Location",
            &report.location,
            app.report_field == ReportField::Location,
            editing,
            palette,
        ),
        field_line(
            "Description",
            &report.description,
            app.report_field == ReportField::Description,
            editing,
            palette,
        ),
        Line::from(""),
        button_line("Submit Report", app.report_field == ReportField::Submit, palette),
    ];

    let paragraph = Paragraph::new(form).block(
        Block::default()
            .title(" Report a Polluted Area ")
            .title_style(palette.muted())
            .borders(Borders::ALL)
            .border_style(palette.border(true)),
    );
    frame.render_widget(paragraph, chunks[0]);

    let items: Vec<ListItem> = if report.entries().is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No areas reported yet.",
            palette.muted(),
        )))]
    } else {
        report
            .entries()
            .iter()
            .map(|entry| ListItem::new(format!("• {}", entry)).style(palette.item()))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Reported Areas ({}) ", report.entries().len()))
            .title_style(palette.muted())
            .borders(Borders::ALL)
            .border_style(palette.border(false)),
    );
    frame.render_widget(list, chunks[1]);
}
