use serde::{Deserialize, Serialize};

/// A clickable spot on the pollution map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPoint {
    /// Location identifier used for the message lookup
    pub location: String,
    pub label: String,
}

/// Registered explanations, keyed by location identifier.
const LOCATION_MESSAGES: &[(&str, &str)] = &[
    (
        "Bayou Desiard",
        "Litter here washes directly into the water, harming fish, birds, and overall water quality.",
    ),
    (
        "ULM Campus Green",
        "Food wrappers and bottles left after events can blow into drains and the bayou.",
    ),
    (
        "Neighborhood Park",
        "Broken glass and plastic litter can make play areas unsafe for children and pets.",
    ),
];

/// Explanation for a location, or the generic fallback for unregistered ones.
pub fn location_message(location: &str) -> String {
    LOCATION_MESSAGES
        .iter()
        .find(|(id, _)| *id == location)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| format!("Pollution at {} harms our community.", location))
}

pub fn builtin_points() -> Vec<MapPoint> {
    LOCATION_MESSAGES
        .iter()
        .map(|(id, _)| MapPoint {
            location: id.to_string(),
            label: id.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_location() {
        assert_eq!(
            location_message("ULM Campus Green"),
            "Food wrappers and bottles left after events can blow into drains and the bayou."
        );
    }

    #[test]
    fn test_unknown_location_fallback() {
        assert_eq!(
            location_message("Unknown Ave"),
            "Pollution at Unknown Ave harms our community."
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        // Case and whitespace are part of the identifier
        assert!(location_message("bayou desiard").starts_with("Pollution at bayou desiard"));
    }

    #[test]
    fn test_builtin_points_are_registered() {
        for point in builtin_points() {
            assert!(!location_message(&point.location).starts_with("Pollution at"));
        }
    }
}
