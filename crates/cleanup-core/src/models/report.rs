use std::fmt;

/// A locally reported polluted area. Lives only for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub location: String,
    pub description: String,
}

impl ReportEntry {
    /// Build an entry from raw form input.
    /// Returns `None` when either field is blank after trimming.
    pub fn from_input(location: &str, description: &str) -> Option<Self> {
        let location = location.trim();
        let description = description.trim();
        if location.is_empty() || description.is_empty() {
            return None;
        }

        Some(Self {
            location: location.to_string(),
            description: description.to_string(),
        })
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_trims() {
        let entry = ReportEntry::from_input("  Main St ", " Overflowing bins\n").unwrap();
        assert_eq!(entry.to_string(), "Main St: Overflowing bins");
    }

    #[test]
    fn test_from_input_rejects_blank_fields() {
        assert!(ReportEntry::from_input("Main St", "").is_none());
        assert!(ReportEntry::from_input("   ", "Trash").is_none());
        assert!(ReportEntry::from_input("", "").is_none());
    }
}
