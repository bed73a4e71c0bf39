//! The six page components.
//!
//! Each component is created by an `init` function that checks the page for
//! the regions it needs and returns `None` when any is missing. Once created,
//! a component only changes in response to its own user actions.

pub mod events;
pub mod map;
pub mod pledge;
pub mod quiz;
pub mod report;
pub mod theme;

pub use events::{EventCard, EventCatalog, EventsView};
pub use map::PollutionMap;
pub use pledge::{Modal, ModalClickTarget, PledgeSubmission};
pub use quiz::QuizGrader;
pub use report::ReportSubmission;
pub use theme::ThemePreference;
