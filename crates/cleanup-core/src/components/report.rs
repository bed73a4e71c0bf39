use tracing::debug;

use crate::models::ReportEntry;
use crate::page::Page;

/// "Report a polluted area" form and its list of entries.
#[derive(Debug, Default)]
pub struct ReportSubmission {
    pub location: String,
    pub description: String,
    /// Most recent first
    entries: Vec<ReportEntry>,
}

impl ReportSubmission {
    /// Requires the form and the reported list.
    pub fn init(page: &Page) -> Option<Self> {
        let region = page.report.as_ref()?;
        if !region.list {
            return None;
        }
        Some(Self::default())
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Submit the form. Blank fields discard the submission silently and
    /// leave the inputs untouched; otherwise the entry goes to the top of
    /// the list and the form is reset.
    pub fn on_submit(&mut self) -> bool {
        let Some(entry) = ReportEntry::from_input(&self.location, &self.description) else {
            return false;
        };

        debug!(location = %entry.location, "Pollution report added");
        self.entries.insert(0, entry);
        self.location.clear();
        self.description.clear();
        true
    }
}
