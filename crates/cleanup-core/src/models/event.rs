use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::format_date;

/// Message shown in place of the event list when a filter matches nothing.
pub const NO_EVENTS_MESSAGE: &str = "No events found for this type. Try another filter.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Waterway,
    Park,
    Trail,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Waterway, EventKind::Park, EventKind::Trail];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Waterway => "waterway",
            EventKind::Park => "park",
            EventKind::Trail => "trail",
        }
    }

    /// Label used by the filter control
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Waterway => "Waterways",
            EventKind::Park => "Parks",
            EventKind::Trail => "Trails",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cleanup activity. The catalog is fixed for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Stored as written, normally `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

impl Event {
    /// "Feb 15, 2025", or the raw stored date if it does not parse
    pub fn formatted_date(&self) -> String {
        format_date(&self.date)
    }

    /// Card meta line: "Feb 15, 2025 • 9:00 AM – 11:30 AM"
    pub fn when(&self) -> String {
        format!("{} • {}", self.formatted_date(), self.time)
    }

    /// Text of the alert shown after signing up for this event.
    pub fn signup_confirmation(&self) -> String {
        format!(
            "Thanks for your interest!\n\nYou signed up (simulated) for:\n\"{}\" at {} on {}.",
            self.title,
            self.location,
            self.formatted_date()
        )
    }
}

/// Value of the events filter control.
///
/// `Only` carries the raw control value so a value naming no known kind
/// still filters (to nothing) instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    Only(String),
}

impl EventFilter {
    pub fn kind(kind: EventKind) -> Self {
        EventFilter::Only(kind.as_str().to_string())
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Only(value) => event.kind.as_str() == value,
        }
    }

    /// Next value of the filter control: all → waterway → park → trail → all
    pub fn next(&self) -> Self {
        match self {
            EventFilter::All => EventFilter::kind(EventKind::Waterway),
            EventFilter::Only(value) => {
                let position = EventKind::ALL.iter().position(|k| k.as_str() == value);
                match position.and_then(|i| EventKind::ALL.get(i + 1)) {
                    Some(kind) => EventFilter::kind(*kind),
                    None => EventFilter::All,
                }
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EventFilter::All => "All events",
            EventFilter::Only(value) => EventKind::ALL
                .iter()
                .find(|k| k.as_str() == value)
                .map(|k| k.label())
                .unwrap_or(value.as_str()),
        }
    }
}

impl FromStr for EventFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(EventFilter::All)
        } else {
            Ok(EventFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventFilter::All => f.write_str("all"),
            EventFilter::Only(value) => f.write_str(value),
        }
    }
}

/// Matching events in catalog order. Never re-sorts.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    events.iter().filter(|e| filter.matches(e)).collect()
}

/// The campaign's scheduled cleanups.
pub fn builtin_events() -> Vec<Event> {
    vec![
        Event {
            title: "Bayou Desiard Shoreline Cleanup".to_string(),
            kind: EventKind::Waterway,
            date: "2025-02-15".to_string(),
            time: "9:00 AM – 11:30 AM".to_string(),
            location: "Bayou Desiard near ULM".to_string(),
            description: "Help remove litter along the bayou banks to protect wildlife and improve water quality.".to_string(),
        },
        Event {
            title: "Campus Green Litter Sweep".to_string(),
            kind: EventKind::Park,
            date: "2025-02-22".to_string(),
            time: "3:00 PM – 5:00 PM".to_string(),
            location: "ULM Campus Green".to_string(),
            description: "Join fellow students to collect trash around common hangout spots and walkways.".to_string(),
        },
        Event {
            title: "Neighborhood Trail Cleanup".to_string(),
            kind: EventKind::Trail,
            date: "2025-03-01".to_string(),
            time: "8:30 AM – 10:30 AM".to_string(),
            location: "Riverwalk Trail".to_string(),
            description: "Walk the trail and pick up bottles, cans, and other debris along the path.".to_string(),
        },
        Event {
            title: "Community Park Refresh Day".to_string(),
            kind: EventKind::Park,
            date: "2025-03-08".to_string(),
            time: "10:00 AM – 1:00 PM".to_string(),
            location: "Monroe Neighborhood Park".to_string(),
            description: "Family-friendly cleanup event with bags, gloves, and snacks provided.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_filter_all_keeps_catalog_order() {
        let events = builtin_events();
        let filtered = filter_events(&events, &EventFilter::All);
        assert_eq!(filtered.len(), 4);
        assert_eq!(
            titles(&filtered),
            events.iter().map(|e| e.title.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_filter_by_kind() {
        let events = builtin_events();

        let parks = filter_events(&events, &EventFilter::kind(EventKind::Park));
        assert_eq!(
            titles(&parks),
            vec!["Campus Green Litter Sweep", "Community Park Refresh Day"]
        );

        let waterways = filter_events(&events, &EventFilter::kind(EventKind::Waterway));
        assert_eq!(titles(&waterways), vec!["Bayou Desiard Shoreline Cleanup"]);

        let trails = filter_events(&events, &EventFilter::kind(EventKind::Trail));
        assert_eq!(titles(&trails), vec!["Neighborhood Trail Cleanup"]);
    }

    #[test]
    fn test_filter_unknown_kind_matches_nothing() {
        let events = builtin_events();
        let filter: EventFilter = "beach".parse().unwrap();
        assert!(filter_events(&events, &filter).is_empty());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<EventFilter>().unwrap(), EventFilter::All);
        assert_eq!(
            "park".parse::<EventFilter>().unwrap(),
            EventFilter::kind(EventKind::Park)
        );
    }

    #[test]
    fn test_filter_next_cycles() {
        let mut filter = EventFilter::All;
        let mut seen = vec![];
        for _ in 0..4 {
            filter = filter.next();
            seen.push(filter.to_string());
        }
        assert_eq!(seen, vec!["waterway", "park", "trail", "all"]);

        // Unknown values fall back to "all"
        assert_eq!(EventFilter::Only("beach".to_string()).next(), EventFilter::All);
    }

    #[test]
    fn test_signup_confirmation() {
        let events = builtin_events();
        assert_eq!(
            events[0].signup_confirmation(),
            "Thanks for your interest!\n\nYou signed up (simulated) for:\n\"Bayou Desiard Shoreline Cleanup\" at Bayou Desiard near ULM on Feb 15, 2025."
        );
    }

    #[test]
    fn test_when_uses_raw_date_on_parse_failure() {
        let mut event = builtin_events().remove(2);
        event.date = "Spring 2025".to_string();
        assert_eq!(event.when(), "Spring 2025 • 8:30 AM – 10:30 AM");
        assert!(event.signup_confirmation().ends_with("on Spring 2025."));
    }

    #[test]
    fn test_event_deserializes_type_field() {
        let json = r#"{"title":"T","type":"trail","date":"2025-01-01","time":"t","location":"L","description":"D"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Trail);
    }
}
