use std::fmt;

/// Storage key holding the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only "dark" selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active visual mode. Exactly one is in effect at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeContext {
    pub mode: ThemeMode,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }
}

/// Flip the active mode.
pub fn toggle(context: ThemeContext) -> ThemeContext {
    ThemeContext::new(context.mode.toggled())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("DARK")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        let start = ThemeContext::default();
        assert_eq!(toggle(start).mode, ThemeMode::Dark);
        assert_eq!(toggle(toggle(start)), start);
    }
}
