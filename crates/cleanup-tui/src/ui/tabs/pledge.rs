use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppState, PledgeField};
use crate::ui::styles::Palette;

use super::{button_line, field_line};

pub fn render(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(pledge) = app.site.pledge.as_ref() else {
        return;
    };
    let editing = app.state == AppState::Editing;

    let mut lines = vec![
        Line::from(""),
        field_line(
            "Name",
            &pledge.name,
            app.pledge_field == PledgeField::Name,
            editing,
            palette,
        ),
        field_line(
            "Email",
            &pledge.email,
            app.pledge_field == PledgeField::Email,
            editing,
            palette,
        ),
        Line::from(""),
        Line::from(Span::styled("  I'm interested in:", palette.muted())),
    ];

    for (i, interest) in pledge.interests().iter().enumerate() {
        let mark = if pledge.is_checked(i) { "[x]" } else { "[ ]" };
        let style = if app.pledge_field == PledgeField::Interest(i) {
            palette.selected()
        } else {
            palette.item()
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{} {}", mark, interest), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(button_line("Take the Pledge", app.pledge_field == PledgeField::Submit, palette));

    if let Some(text) = pledge.confirmation() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", text), palette.success())));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Volunteer Pledge ")
                .title_style(palette.muted())
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
