//! Application state for the Cleanup Crew TUI.
//!
//! `App` owns the loaded `Site` plus the terminal-only state: which tab is
//! showing, what is selected on each tab, and which overlay is open.

use anyhow::Result;
use tracing::{debug, info, warn};

use cleanup_core::components::ModalClickTarget;
use cleanup_core::models::ThemeMode;
use cleanup_core::store::JsonFileStore;
use cleanup_core::{Config, Page, Site};

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for any text input field.
const MAX_INPUT_LENGTH: usize = 120;

// ============================================================================
// UI State Types
// ============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Events,
    Quiz,
    Map,
    Report,
    Pledge,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Events, Tab::Quiz, Tab::Map, Tab::Report, Tab::Pledge];

    /// Get the display title for this tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Events => "Events",
            Tab::Quiz => "Quiz",
            Tab::Map => "Map",
            Tab::Report => "Report",
            Tab::Pledge => "Pledge",
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    /// Typing into the focused form field
    Editing,
    ShowingHelp,
    /// Event sign-up confirmation on screen
    ShowingAlert,
    ConfirmingQuit,
    Quitting,
}

/// Focusable controls of the report form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Location,
    Description,
    Submit,
}

impl ReportField {
    pub fn next(&self) -> Self {
        match self {
            ReportField::Location => ReportField::Description,
            ReportField::Description => ReportField::Submit,
            ReportField::Submit => ReportField::Location,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ReportField::Location => ReportField::Submit,
            ReportField::Description => ReportField::Location,
            ReportField::Submit => ReportField::Description,
        }
    }
}

/// Focusable controls of the pledge form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PledgeField {
    Name,
    Email,
    Interest(usize),
    Submit,
}

impl PledgeField {
    /// Next control given `interests` checkboxes between email and submit.
    pub fn next(&self, interests: usize) -> Self {
        match *self {
            PledgeField::Name => PledgeField::Email,
            PledgeField::Email if interests > 0 => PledgeField::Interest(0),
            PledgeField::Email => PledgeField::Submit,
            PledgeField::Interest(i) if i + 1 < interests => PledgeField::Interest(i + 1),
            PledgeField::Interest(_) => PledgeField::Submit,
            PledgeField::Submit => PledgeField::Name,
        }
    }

    pub fn prev(&self, interests: usize) -> Self {
        match *self {
            PledgeField::Name => PledgeField::Submit,
            PledgeField::Email => PledgeField::Name,
            PledgeField::Interest(0) => PledgeField::Email,
            PledgeField::Interest(i) => PledgeField::Interest(i - 1),
            PledgeField::Submit if interests > 0 => PledgeField::Interest(interests - 1),
            PledgeField::Submit => PledgeField::Email,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, PledgeField::Name | PledgeField::Email)
    }
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub site: Site<JsonFileStore>,

    // UI State
    pub state: AppState,
    pub current_tab: Tab,
    /// Tabs whose component initialized, in display order
    pub tabs: Vec<Tab>,

    // Selection indices
    pub event_selection: usize,
    pub quiz_question: usize,
    pub quiz_option: usize,
    pub map_selection: usize,
    pub report_field: ReportField,
    pub pledge_field: PledgeField,

    /// Text of the open alert overlay
    pub alert: Option<String>,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Open the preference store and the page, then initialize the site.
    pub fn new(config: &Config) -> Result<Self> {
        let prefs_path = config.preferences_path()?;
        let store = JsonFileStore::open(&prefs_path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to open preference file, starting empty");
            JsonFileStore::empty(&prefs_path)
        });

        let page = config.page();
        Ok(Self::with_site(&page, store))
    }

    pub fn with_site(page: &Page, store: JsonFileStore) -> Self {
        let site = Site::load(page, store);
        let tabs: Vec<Tab> = Tab::ALL
            .into_iter()
            .filter(|tab| match tab {
                Tab::Events => site.events.is_some(),
                Tab::Quiz => site.quiz.is_some(),
                Tab::Map => site.map.is_some(),
                Tab::Report => site.report.is_some(),
                Tab::Pledge => site.pledge.is_some(),
            })
            .collect();
        debug!(?tabs, "Available tabs");

        Self {
            current_tab: tabs.first().copied().unwrap_or(Tab::Events),
            tabs,
            site,
            state: AppState::Normal,
            event_selection: 0,
            quiz_question: 0,
            quiz_option: 0,
            map_selection: 0,
            report_field: ReportField::Location,
            pledge_field: PledgeField::Name,
            alert: None,
            status_message: None,
        }
    }

    // ===== Theme =====

    pub fn theme_mode(&self) -> ThemeMode {
        self.site
            .theme
            .as_ref()
            .map(|t| t.mode())
            .unwrap_or_default()
    }

    /// Theme toggle control. Does nothing when the page has no toggle.
    pub fn toggle_theme(&mut self) {
        if let Some(theme) = self.site.theme.as_mut() {
            let mode = theme.on_toggle();
            self.status_message = Some(format!("Switched to {} mode", mode));
        }
    }

    // ===== Tabs =====

    pub fn select_tab(&mut self, tab: Tab) {
        if self.tabs.contains(&tab) {
            self.current_tab = tab;
            self.status_message = None;
        }
    }

    pub fn select_tab_index(&mut self, index: usize) {
        if let Some(tab) = self.tabs.get(index).copied() {
            self.select_tab(tab);
        }
    }

    pub fn next_tab(&mut self) {
        self.cycle_tab(1);
    }

    pub fn prev_tab(&mut self) {
        self.cycle_tab(self.tabs.len().saturating_sub(1));
    }

    fn cycle_tab(&mut self, step: usize) {
        if self.tabs.is_empty() {
            return;
        }
        let pos = self
            .tabs
            .iter()
            .position(|t| *t == self.current_tab)
            .unwrap_or(0);
        self.select_tab(self.tabs[(pos + step) % self.tabs.len()]);
    }

    // ===== Events =====

    /// Filter control change: advance to the next filter value.
    pub fn cycle_event_filter(&mut self) {
        if let Some(events) = self.site.events.as_mut() {
            let next = events.filter().next();
            events.render(next);
            self.event_selection = 0;
        }
    }

    pub fn event_card_count(&self) -> usize {
        self.site
            .events
            .as_ref()
            .map(|e| e.view().cards().len())
            .unwrap_or(0)
    }

    /// Sign-up on the selected card; opens the alert overlay.
    pub fn sign_up_selected(&mut self) {
        let confirmation = self
            .site
            .events
            .as_ref()
            .and_then(|e| e.sign_up(self.event_selection));
        if let Some(text) = confirmation {
            self.alert = Some(text);
            self.state = AppState::ShowingAlert;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.state = AppState::Normal;
    }

    // ===== Quiz =====

    pub fn quiz_len(&self) -> usize {
        self.site
            .quiz
            .as_ref()
            .map(|q| q.questions().len())
            .unwrap_or(0)
    }

    fn quiz_option_count(&self) -> usize {
        self.site
            .quiz
            .as_ref()
            .and_then(|q| q.questions().get(self.quiz_question))
            .map(|q| q.options.len())
            .unwrap_or(0)
    }

    pub fn move_quiz_question(&mut self, down: bool) {
        self.quiz_question = step(self.quiz_question, self.quiz_len(), down);
        self.quiz_option = 0;
    }

    pub fn move_quiz_option(&mut self, forward: bool) {
        self.quiz_option = step(self.quiz_option, self.quiz_option_count(), forward);
    }

    /// Check the option under the cursor in the current question.
    pub fn select_quiz_option(&mut self) {
        let question = self.quiz_question;
        let option = self.quiz_option;
        if let Some(quiz) = self.site.quiz.as_mut() {
            let value = quiz
                .questions()
                .get(question)
                .and_then(|q| q.options.get(option))
                .map(|o| o.value.clone());
            if let Some(value) = value {
                quiz.select(question, &value);
            }
        }
    }

    pub fn submit_quiz(&mut self) {
        if let Some(quiz) = self.site.quiz.as_mut() {
            let score = quiz.on_submit();
            info!(score = score.score, total = score.total, "Quiz graded");
        }
    }

    // ===== Map =====

    pub fn map_len(&self) -> usize {
        self.site.map.as_ref().map(|m| m.points().len()).unwrap_or(0)
    }

    pub fn activate_map_point(&mut self) {
        let index = self.map_selection;
        if let Some(map) = self.site.map.as_mut() {
            map.activate(index);
        }
    }

    // ===== Report =====

    fn report_input(&mut self) -> Option<&mut String> {
        let report = self.site.report.as_mut()?;
        match self.report_field {
            ReportField::Location => Some(&mut report.location),
            ReportField::Description => Some(&mut report.description),
            ReportField::Submit => None,
        }
    }

    pub fn submit_report(&mut self) {
        if let Some(report) = self.site.report.as_mut() {
            if report.on_submit() {
                self.report_field = ReportField::Location;
            }
        }
    }

    // ===== Pledge =====

    pub fn pledge_interest_count(&self) -> usize {
        self.site
            .pledge
            .as_ref()
            .map(|p| p.interests().len())
            .unwrap_or(0)
    }

    fn pledge_input(&mut self) -> Option<&mut String> {
        let pledge = self.site.pledge.as_mut()?;
        match self.pledge_field {
            PledgeField::Name => Some(&mut pledge.name),
            PledgeField::Email => Some(&mut pledge.email),
            PledgeField::Interest(_) | PledgeField::Submit => None,
        }
    }

    pub fn toggle_pledge_interest(&mut self) {
        if let PledgeField::Interest(i) = self.pledge_field {
            if let Some(pledge) = self.site.pledge.as_mut() {
                pledge.toggle_interest(i);
            }
        }
    }

    pub fn submit_pledge(&mut self) {
        if let Some(pledge) = self.site.pledge.as_mut() {
            pledge.on_submit();
            self.pledge_field = PledgeField::Name;
        }
    }

    pub fn pledge_modal_open(&self) -> bool {
        self.site.pledge.as_ref().is_some_and(|p| p.modal_open())
    }

    pub fn close_pledge_modal(&mut self) {
        if let Some(pledge) = self.site.pledge.as_mut() {
            pledge.on_close_click();
        }
    }

    pub fn click_pledge_modal(&mut self, target: ModalClickTarget) {
        if let Some(pledge) = self.site.pledge.as_mut() {
            pledge.on_modal_click(target);
        }
    }

    // ===== Text entry =====

    /// The text field that has focus on the current tab, if any.
    pub fn focused_input(&mut self) -> Option<&mut String> {
        match self.current_tab {
            Tab::Report => self.report_input(),
            Tab::Pledge => self.pledge_input(),
            _ => None,
        }
    }

    pub fn push_input_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            if can_add_input_char(input.chars().count(), c) {
                input.push(c);
            }
        }
    }

    pub fn pop_input_char(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop();
        }
    }
}

/// Move `current` one step within `0..len`, wrapping at both ends.
pub fn step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Check if a character is valid for text input (printable, non-control)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if a form character should be accepted
pub fn can_add_input_char(current_len: usize, c: char) -> bool {
    current_len < MAX_INPUT_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cleanup_core::models::ThemeMode;
    use cleanup_core::page::PledgeRegion;

    fn test_store(name: &str) -> JsonFileStore {
        let dir = std::env::temp_dir().join(format!("cleanup_tui_test_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        JsonFileStore::empty(dir.join("prefs.json"))
    }

    fn app(name: &str) -> App {
        App::with_site(&Page::builtin(), test_store(name))
    }

    // -------------------------------------------------------------------------
    // Tab Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tabs_follow_initialized_components() {
        let app = app("tabs_all");
        assert_eq!(app.tabs, Tab::ALL.to_vec());

        let page = Page {
            quiz: None,
            map: None,
            ..Page::builtin()
        };
        let app = App::with_site(&page, test_store("tabs_some"));
        assert_eq!(app.tabs, vec![Tab::Events, Tab::Report, Tab::Pledge]);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut app = app("tab_cycle");
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Pledge);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Events);
        app.select_tab_index(2);
        assert_eq!(app.current_tab, Tab::Map);
        app.select_tab_index(9);
        assert_eq!(app.current_tab, Tab::Map);
    }

    // -------------------------------------------------------------------------
    // Component Wiring Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_filter_cycle_resets_selection() {
        let mut app = app("filter_cycle");
        app.event_selection = 3;
        app.cycle_event_filter();
        assert_eq!(app.event_selection, 0);
        assert_eq!(app.event_card_count(), 1);
        app.cycle_event_filter();
        assert_eq!(app.event_card_count(), 2);
    }

    #[test]
    fn test_sign_up_opens_alert() {
        let mut app = app("sign_up");
        app.event_selection = 1;
        app.sign_up_selected();
        assert_eq!(app.state, AppState::ShowingAlert);
        assert!(app.alert.as_deref().unwrap().contains("Campus Green Litter Sweep"));
        app.dismiss_alert();
        assert_eq!(app.state, AppState::Normal);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_quiz_cursor_selection() {
        let mut app = app("quiz");
        app.move_quiz_option(true);
        app.select_quiz_option();
        app.submit_quiz();
        let quiz = app.site.quiz.as_ref().unwrap();
        assert_eq!(quiz.selected(0), Some("aluminum-can"));
        assert!(quiz.result().unwrap().starts_with("You scored 1 out of 3."));
    }

    #[test]
    fn test_report_typing_and_submit() {
        let mut app = app("report");
        app.select_tab(Tab::Report);
        "Main St".chars().for_each(|c| app.push_input_char(c));
        app.submit_report();
        assert!(app.site.report.as_ref().unwrap().entries().is_empty());

        app.report_field = ReportField::Description;
        "Trash".chars().for_each(|c| app.push_input_char(c));
        app.pop_input_char();
        app.submit_report();
        let report = app.site.report.as_ref().unwrap();
        assert_eq!(report.entries()[0].to_string(), "Main St: Tras");
        assert_eq!(app.report_field, ReportField::Location);
    }

    #[test]
    fn test_pledge_modal_flow() {
        let mut app = app("pledge");
        app.select_tab(Tab::Pledge);
        app.pledge_field = PledgeField::Interest(1);
        app.toggle_pledge_interest();
        app.submit_pledge();
        assert!(app.pledge_modal_open());
        assert_eq!(app.pledge_field, PledgeField::Name);

        app.click_pledge_modal(ModalClickTarget::Content);
        assert!(app.pledge_modal_open());
        app.close_pledge_modal();
        assert!(!app.pledge_modal_open());
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut app = app("theme");
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        app.toggle_theme();
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert_eq!(app.status_message.as_deref(), Some("Switched to dark mode"));
    }

    // -------------------------------------------------------------------------
    // Navigation Helper Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_pledge_field_navigation() {
        assert_eq!(PledgeField::Email.next(2), PledgeField::Interest(0));
        assert_eq!(PledgeField::Interest(1).next(2), PledgeField::Submit);
        assert_eq!(PledgeField::Email.next(0), PledgeField::Submit);
        assert_eq!(PledgeField::Submit.prev(2), PledgeField::Interest(1));
        assert_eq!(PledgeField::Interest(0).prev(2), PledgeField::Email);
        assert_eq!(PledgeField::Name.prev(0), PledgeField::Submit);
    }

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(0, 3, false), 2);
        assert_eq!(step(2, 3, true), 0);
        assert_eq!(step(5, 0, true), 0);
    }

    #[test]
    fn test_can_add_input_char() {
        assert!(can_add_input_char(0, 'a'));
        assert!(can_add_input_char(119, '@'));
        assert!(!can_add_input_char(120, 'a'));
        assert!(!can_add_input_char(0, '\n'));
        assert!(!can_add_input_char(0, '\t'));
    }

    #[test]
    fn test_pledge_without_modal_never_blocks() {
        let page = Page {
            pledge: Some(PledgeRegion {
                interests: vec![],
                confirmation: true,
                modal: None,
            }),
            ..Page::builtin()
        };
        let mut app = App::with_site(&page, test_store("no_modal"));
        app.submit_pledge();
        assert!(!app.pledge_modal_open());
    }
}
