/// Name used when the pledger leaves the name field blank.
pub const DEFAULT_PLEDGE_NAME: &str = "Friend";

/// Stand-in for the interest list when no interest was checked.
pub const NO_INTERESTS_PHRASE: &str = "local cleanup opportunities";

/// A volunteer's pledge, built on submit and used only for acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PledgeSubmissionRecord {
    pub name: String,
    pub email: String,
    pub interests: Vec<String>,
}

impl PledgeSubmissionRecord {
    pub fn from_input(name: &str, email: &str, interests: Vec<String>) -> Self {
        let name = match name.trim() {
            "" => DEFAULT_PLEDGE_NAME,
            n => n,
        };

        Self {
            name: name.to_string(),
            email: email.trim().to_string(),
            interests,
        }
    }

    /// Inline text for the confirmation region
    pub fn confirmation_text(&self) -> String {
        format!(
            "Thanks, {}! This site can’t send emails, but we’ve recorded your pledge to support future cleanup efforts.",
            self.name
        )
    }

    /// Longer acknowledgment for the modal
    pub fn modal_text(&self) -> String {
        let interests = if self.interests.is_empty() {
            NO_INTERESTS_PHRASE.to_string()
        } else {
            self.interests.join(", ")
        };

        format!(
            "Thanks, {}! You’re now part of the Cleanup Crew. When real events are organized, someone could email you at {} with details about {}.",
            self.name, self.email, interests
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_defaults_to_friend() {
        let record = PledgeSubmissionRecord::from_input("   ", "a@b.com", vec![]);
        assert_eq!(record.name, "Friend");
        assert!(record.confirmation_text().starts_with("Thanks, Friend!"));
        assert!(record.modal_text().contains("local cleanup opportunities"));
        assert!(record.modal_text().contains("a@b.com"));
    }

    #[test]
    fn test_interests_are_comma_joined() {
        let record = PledgeSubmissionRecord::from_input(
            "Dana",
            " dana@example.com ",
            vec!["Waterways".to_string(), "Parks".to_string()],
        );
        assert_eq!(
            record.modal_text(),
            "Thanks, Dana! You’re now part of the Cleanup Crew. When real events are organized, someone could email you at dana@example.com with details about Waterways, Parks."
        );
    }

    #[test]
    fn test_email_is_not_validated() {
        let record = PledgeSubmissionRecord::from_input("Sam", "not an email", vec![]);
        assert_eq!(record.email, "not an email");
    }
}
