use tracing::{debug, info, warn};

use crate::models::{toggle, ThemeContext, ThemeMode, THEME_KEY};
use crate::page::Page;
use crate::store::PreferenceStore;

/// Light/dark toggle backed by a preference store.
pub struct ThemePreference<S> {
    context: ThemeContext,
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Apply the stored preference. Requires the page's theme toggle.
    pub fn init(page: &Page, store: S) -> Option<Self> {
        if !page.theme_toggle {
            return None;
        }

        let stored = match store.get_item(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference, using light");
                None
            }
        };
        let context = ThemeContext::new(ThemeMode::from_stored(stored.as_deref()));
        debug!(mode = %context.mode, "Theme preference applied");

        Some(Self { context, store })
    }

    pub fn mode(&self) -> ThemeMode {
        self.context.mode
    }

    pub fn context(&self) -> ThemeContext {
        self.context
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the mode and persist it. A failed write keeps the new mode
    /// for this session.
    pub fn on_toggle(&mut self) -> ThemeMode {
        self.context = toggle(self.context);
        let mode = self.context.mode;

        if let Err(e) = self.store.set_item(THEME_KEY, mode.as_str()) {
            warn!(error = %e, %mode, "Failed to persist theme preference");
        }
        info!(%mode, "Theme toggled");
        mode
    }
}
