use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppState, Tab};

use super::styles::{self, Palette};
use super::tabs::{events, map, pledge, quiz, report};

/// Size of the pledge modal dialog
const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 11;

pub fn render(frame: &mut Frame, app: &App) {
    let palette = styles::palette(app.theme_mode());
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(2), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0], &palette);
    render_tabs(frame, app, chunks[1], &palette);
    render_main_content(frame, app, chunks[2], &palette);
    render_status_bar(frame, app, chunks[3], &palette);

    // Render overlays
    if app.pledge_modal_open() {
        render_pledge_modal(frame, app, &palette);
    }

    match app.state {
        AppState::ShowingHelp => render_help_overlay(frame, &palette),
        AppState::ShowingAlert => render_alert_overlay(frame, app, &palette),
        AppState::ConfirmingQuit => render_quit_overlay(frame, &palette),
        _ => {}
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let title = "  Cleanup Crew";
    let theme_hint = if app.site.theme.is_some() {
        format!("[t] {} mode  ", app.theme_mode())
    } else {
        String::new()
    };
    let help_hint = "[?] Help";

    let title_line = Line::from(vec![
        Span::styled(title, palette.title()),
        Span::raw(" ".repeat(
            (area.width as usize)
                .saturating_sub(title.len() + theme_hint.len() + help_hint.len() + 2),
        )),
        Span::styled(theme_hint, palette.muted()),
        Span::styled(help_hint, palette.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.muted());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in app.tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", palette.muted()));
        }
        let label = format!("[{}] {}", i + 1, tab.title());
        spans.push(Span::styled(label, palette.tab(*tab == app.current_tab)));
    }

    // Filter control shown on the right of the Events tab
    if app.current_tab == Tab::Events {
        if let Some(events) = app.site.events.as_ref() {
            let filter = format!("[f]ilter: {} ", events.filter().label());
            let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let padding = (area.width as usize).saturating_sub(used + filter.len());
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(filter, palette.highlight()));
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.muted());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    if app.tabs.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "  This page has nothing interactive.",
            palette.muted(),
        )));
        frame.render_widget(paragraph, area);
        return;
    }

    match app.current_tab {
        Tab::Events => events::render(frame, app, area, palette),
        Tab::Quiz => quiz::render(frame, app, area, palette),
        Tab::Map => map::render(frame, app, area, palette),
        Tab::Report => report::render(frame, app, area, palette),
        Tab::Pledge => pledge::render(frame, app, area, palette),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let shortcuts = match (app.state, app.current_tab) {
        (AppState::Editing, _) => "typing: [Enter]/[Esc] done",
        (_, Tab::Events) => "[↑↓] select | [Enter] sign up | [q]uit",
        (_, Tab::Quiz) => "[↑↓] question | [←→] option | [Space] pick | [s]ubmit | [q]uit",
        (_, Tab::Map) => "[↑↓] point | [Enter] show | [q]uit",
        (_, Tab::Report) | (_, Tab::Pledge) => "[↑↓] field | [Enter] edit/submit | [q]uit",
    };

    let left_text = match app.status_message {
        Some(ref msg) => format!(" {} ", msg),
        None => String::new(),
    };
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());
    let status_line = Line::from(vec![
        Span::styled(left_text, palette.muted()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(status_line).style(palette.status_bar()), area);
}

fn help_line<'a>(key: &'a str, desc: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), palette.help_key()),
        Span::styled(desc, palette.help_desc()),
    ])
}

fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect_fixed(52, 22, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("  Cleanup Crew", palette.title())),
        Line::from(Span::styled(format!("  version {}", version), palette.muted())),
        Line::from(""),
        Line::from(Span::styled(" Navigation", palette.highlight())),
        help_line("1-5", "Switch tabs", palette),
        help_line("←/→", "Prev/next tab (quiz: option)", palette),
        help_line("↑/↓", "Move selection", palette),
        help_line("Enter", "Activate / edit / submit", palette),
        Line::from(""),
        Line::from(Span::styled(" Actions", palette.highlight())),
        help_line("t", "Toggle light/dark mode", palette),
        help_line("f", "Cycle event filter", palette),
        help_line("Space", "Pick quiz option / interest", palette),
        help_line("s", "Submit quiz", palette),
        help_line("q", "Quit", palette),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", palette.muted()),
            Span::styled("?", palette.help_key()),
            Span::styled(" or ", palette.muted()),
            Span::styled("Esc", palette.help_key()),
            Span::styled(" to close", palette.muted()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

fn render_alert_overlay(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(ref text) = app.alert else {
        return;
    };
    let area = centered_rect_fixed(64, 10, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = text
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), palette.item())))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", palette.muted()),
        Span::styled("[Enter]", palette.help_key()),
        Span::styled(" to close", palette.muted()),
    ]));

    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Where the pledge modal's content box sits within `area`.
/// Clicks outside it land on the backdrop.
pub fn modal_area(area: Rect) -> Rect {
    centered_rect_fixed(MODAL_WIDTH, MODAL_HEIGHT, area)
}

fn render_pledge_modal(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(modal) = app.site.pledge.as_ref().and_then(|p| p.modal()) else {
        return;
    };

    // Dim the backdrop
    frame.render_widget(
        Block::default().style(palette.muted().bg(palette.highlight)),
        frame.area(),
    );

    let area = modal_area(frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from(Span::styled(
        modal.message().unwrap_or_default().to_string(),
        palette.item(),
    ))];
    if modal.has_close_control() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[x] Close", palette.help_key()),
            Span::styled("  or click outside", palette.muted()),
        ]));
    }

    let block = Block::default()
        .title(" Pledge received ")
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect_fixed(40, 5, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            " Are you sure you want to quit?",
            palette.highlight(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Press ", palette.muted()),
            Span::styled("[Y]", palette.help_key()),
            Span::styled(" to quit, ", palette.muted()),
            Span::styled("[N]", palette.help_key()),
            Span::styled(" to cancel", palette.muted()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
