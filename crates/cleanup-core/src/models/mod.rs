//! Data models and pure transforms for the cleanup site.
//!
//! - `Event`, `EventFilter`: the fixed event catalog and its filter
//! - `QuizQuestion`, `QuizScore`: quiz content and grading
//! - `MapPoint`: map locations and their explanations
//! - `ReportEntry`: locally reported polluted areas
//! - `PledgeSubmissionRecord`: volunteer pledge acknowledgment text
//! - `ThemeMode`, `ThemeContext`: light/dark preference

pub mod event;
pub mod map;
pub mod pledge;
pub mod quiz;
pub mod report;
pub mod theme;

pub use event::{builtin_events, filter_events, Event, EventFilter, EventKind, NO_EVENTS_MESSAGE};
pub use map::{builtin_points, location_message, MapPoint};
pub use pledge::{PledgeSubmissionRecord, DEFAULT_PLEDGE_NAME, NO_INTERESTS_PHRASE};
pub use quiz::{builtin_questions, grade, group_name, QuizOption, QuizQuestion, QuizScore, QuizSelections, QuizTier};
pub use report::ReportEntry;
pub use theme::{toggle, ThemeContext, ThemeMode, THEME_KEY};
