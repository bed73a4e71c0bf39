use ratatui::style::{Color, Modifier, Style};

use cleanup_core::models::ThemeMode;

/// Colors for one visual mode.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub highlight: Color,
    pub status_bar: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(246, 248, 242),
    text: Color::Rgb(32, 40, 32),
    primary: Color::Rgb(34, 110, 70),
    secondary: Color::Rgb(40, 100, 150),
    accent: Color::Rgb(170, 110, 20),
    muted: Color::Rgb(110, 118, 110),
    highlight: Color::Rgb(214, 230, 214),
    status_bar: Color::Rgb(224, 230, 220),
};

const DARK: Palette = Palette {
    background: Color::Rgb(20, 24, 22),
    text: Color::Rgb(228, 232, 226),
    primary: Color::Rgb(96, 192, 128),
    secondary: Color::Rgb(96, 160, 208),
    accent: Color::Rgb(214, 176, 72),
    muted: Color::Rgb(128, 136, 128),
    highlight: Color::Rgb(44, 58, 50),
    status_bar: Color::Rgb(32, 38, 34),
};

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}

impl Palette {
    /// Base style painted over the whole frame
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn tab(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            self.muted()
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn status_bar(&self) -> Style {
        Style::default().bg(self.status_bar).fg(self.text)
    }

    pub fn help_key(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_desc(&self) -> Style {
        Style::default().fg(self.text)
    }
}
