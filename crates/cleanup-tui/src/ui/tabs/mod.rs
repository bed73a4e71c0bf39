use ratatui::text::{Line, Span};

use super::styles::Palette;

pub mod events;
pub mod map;
pub mod pledge;
pub mod quiz;
pub mod report;

/// A labeled single-line text input. Shows a cursor while being edited.
pub fn field_line(
    label: &str,
    value: &str,
    focused: bool,
    editing: bool,
    palette: &Palette,
) -> Line<'static> {
    let style = if focused {
        palette.selected()
    } else {
        palette.item()
    };
    let cursor = if focused && editing { "▌" } else { "" };
    Line::from(vec![
        Span::styled(format!("  {:<13}[", label), palette.muted()),
        Span::styled(format!("{:<30}{}", value, cursor), style),
        Span::styled("]", palette.muted()),
    ])
}

/// A form's submit button
pub fn button_line(label: &str, focused: bool, palette: &Palette) -> Line<'static> {
    if focused {
        Line::from(vec![
            Span::raw("  ["),
            Span::styled(format!(" ▶ {} ◀ ", label), palette.selected()),
            Span::raw("]"),
        ])
    } else {
        Line::from(vec![
            Span::raw("  ["),
            Span::styled(format!("   {}   ", label), palette.item()),
            Span::raw("]"),
        ])
    }
}
