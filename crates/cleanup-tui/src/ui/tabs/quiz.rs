use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::styles::Palette;

pub fn render(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(quiz) = app.site.quiz.as_ref() else {
        return;
    };

    let mut lines = vec![];
    for (i, question) in quiz.questions().iter().enumerate() {
        let current = i == app.quiz_question;
        let prompt_style = if current { palette.title() } else { palette.item() };
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, question.prompt),
            prompt_style,
        )));

        for (j, option) in question.options.iter().enumerate() {
            let checked = quiz.selected(i) == Some(option.value.as_str());
            let marker = if checked { "(•)" } else { "( )" };
            let style = if current && j == app.quiz_option {
                palette.selected()
            } else {
                palette.item()
            };
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(format!("{} {}", marker, option.label), style),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("[s] Check answers", palette.help_key())));
    if let Some(result) = quiz.result() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(result.to_string(), palette.success())));
    }

    let block = Block::default()
        .title(" Recycling Quiz ")
        .title_style(palette.muted())
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
