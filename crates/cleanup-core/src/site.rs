use tracing::info;

use crate::components::{
    EventCatalog, PledgeSubmission, PollutionMap, QuizGrader, ReportSubmission, ThemePreference,
};
use crate::page::Page;
use crate::store::PreferenceStore;

/// Every component of a loaded page. Components whose regions are missing
/// are `None`.
pub struct Site<S> {
    pub theme: Option<ThemePreference<S>>,
    pub events: Option<EventCatalog>,
    pub quiz: Option<QuizGrader>,
    pub map: Option<PollutionMap>,
    pub report: Option<ReportSubmission>,
    pub pledge: Option<PledgeSubmission>,
}

impl<S: PreferenceStore> Site<S> {
    /// Run every component initializer against `page`.
    pub fn load(page: &Page, store: S) -> Self {
        let site = Self {
            theme: ThemePreference::init(page, store),
            events: EventCatalog::init(page),
            quiz: QuizGrader::init(page),
            map: PollutionMap::init(page),
            report: ReportSubmission::init(page),
            pledge: PledgeSubmission::init(page),
        };

        info!(
            theme = site.theme.is_some(),
            events = site.events.is_some(),
            quiz = site.quiz.is_some(),
            map = site.map.is_some(),
            report = site.report.is_some(),
            pledge = site.pledge.is_some(),
            "Site loaded"
        );
        site
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_builtin_page_activates_everything() {
        let site = Site::load(&Page::builtin(), MemoryStore::new());
        assert!(site.theme.is_some());
        assert!(site.events.is_some());
        assert!(site.quiz.is_some());
        assert!(site.map.is_some());
        assert!(site.report.is_some());
        assert!(site.pledge.is_some());
    }

    #[test]
    fn test_empty_page_activates_nothing() {
        let site = Site::load(&Page::default(), MemoryStore::new());
        assert!(site.theme.is_none());
        assert!(site.events.is_none());
        assert!(site.quiz.is_none());
        assert!(site.map.is_none());
        assert!(site.report.is_none());
        assert!(site.pledge.is_none());
    }
}
