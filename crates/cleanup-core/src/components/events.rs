use tracing::debug;

use crate::models::{builtin_events, Event, EventFilter, NO_EVENTS_MESSAGE};
use crate::page::Page;

/// A rendered event card. Its sign-up action is bound to the view that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub title: String,
    /// "Feb 15, 2025 • 9:00 AM – 11:30 AM"
    pub when: String,
    pub location: String,
    pub description: String,
    event_index: usize,
}

/// What the events container currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventsView {
    Cards(Vec<EventCard>),
    NoResults(&'static str),
}

impl EventsView {
    pub fn cards(&self) -> &[EventCard] {
        match self {
            EventsView::Cards(cards) => cards,
            EventsView::NoResults(_) => &[],
        }
    }
}

pub struct EventCatalog {
    events: Vec<Event>,
    filter: EventFilter,
    view: EventsView,
}

impl EventCatalog {
    /// Requires both the list container and the filter control.
    pub fn init(page: &Page) -> Option<Self> {
        let region = page.events.as_ref()?;
        if !region.list || !region.filter {
            return None;
        }
        Some(Self::new(builtin_events()))
    }

    /// Catalog over `events`, initially unfiltered.
    pub fn new(events: Vec<Event>) -> Self {
        let mut catalog = Self {
            events,
            filter: EventFilter::All,
            view: EventsView::Cards(vec![]),
        };
        catalog.render(EventFilter::All);
        catalog
    }

    /// Replace the view with the events matching `filter`, in catalog order.
    pub fn render(&mut self, filter: EventFilter) {
        let cards: Vec<EventCard> = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| filter.matches(e))
            .map(|(i, e)| EventCard {
                title: e.title.clone(),
                when: e.when(),
                location: e.location.clone(),
                description: e.description.clone(),
                event_index: i,
            })
            .collect();

        debug!(filter = %filter, count = cards.len(), "Rendered events");
        self.view = if cards.is_empty() {
            EventsView::NoResults(NO_EVENTS_MESSAGE)
        } else {
            EventsView::Cards(cards)
        };
        self.filter = filter;
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn view(&self) -> &EventsView {
        &self.view
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Sign-up action of the card at `card` in the current view.
    /// Returns the confirmation to show, or `None` if there is no such card.
    pub fn sign_up(&self, card: usize) -> Option<String> {
        let card = self.view.cards().get(card)?;
        let event = self.events.get(card.event_index)?;
        debug!(title = %event.title, "Event sign-up");
        Some(event.signup_confirmation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{filter_events, EventKind};
    use crate::page::EventsRegion;

    fn card_titles(catalog: &EventCatalog) -> Vec<&str> {
        catalog.view().cards().iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_initial_view_is_unfiltered() {
        let catalog = EventCatalog::init(&Page::builtin()).unwrap();
        assert_eq!(catalog.filter(), &EventFilter::All);
        assert_eq!(catalog.view().cards().len(), 4);
    }

    #[test]
    fn test_render_matches_literal_subsets() {
        let mut catalog = EventCatalog::new(builtin_events());
        let events = builtin_events();

        for value in ["waterway", "park", "trail", "all"] {
            let filter: EventFilter = value.parse().unwrap();
            catalog.render(filter.clone());
            let expected: Vec<&str> = filter_events(&events, &filter)
                .iter()
                .map(|e| e.title.as_str())
                .collect();
            assert_eq!(card_titles(&catalog), expected, "filter {}", value);
        }
    }

    #[test]
    fn test_unknown_type_renders_no_results() {
        let mut catalog = EventCatalog::new(builtin_events());
        catalog.render("beach".parse().unwrap());
        assert_eq!(catalog.view(), &EventsView::NoResults(NO_EVENTS_MESSAGE));
        assert!(catalog.view().cards().is_empty());
        assert_eq!(catalog.sign_up(0), None);
    }

    #[test]
    fn test_sign_up_uses_current_view() {
        let mut catalog = EventCatalog::new(builtin_events());
        let first = catalog.sign_up(0).unwrap();
        assert!(first.contains("\"Bayou Desiard Shoreline Cleanup\""));

        // After re-filtering, card 0 is the first park event
        catalog.render(EventFilter::kind(EventKind::Park));
        let park = catalog.sign_up(0).unwrap();
        assert!(park.contains("\"Campus Green Litter Sweep\" at ULM Campus Green on Feb 22, 2025."));
        assert_eq!(catalog.sign_up(2), None);
    }

    #[test]
    fn test_card_fields() {
        let catalog = EventCatalog::new(builtin_events());
        let card = &catalog.view().cards()[2];
        assert_eq!(card.when, "Mar 1, 2025 • 8:30 AM – 10:30 AM");
        assert_eq!(card.location, "Riverwalk Trail");
    }

    #[test]
    fn test_missing_filter_control_is_inactive() {
        let page = Page {
            events: Some(EventsRegion {
                list: true,
                filter: false,
            }),
            ..Page::builtin()
        };
        assert!(EventCatalog::init(&page).is_none());

        let page = Page {
            events: None,
            ..Page::builtin()
        };
        assert!(EventCatalog::init(&page).is_none());
    }
}
