use tracing::{debug, info};

use crate::models::PledgeSubmissionRecord;
use crate::page::Page;

/// Where a click inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClickTarget {
    /// The dimmed backdrop around the dialog
    Backdrop,
    /// The dialog itself or anything inside it
    Content,
}

/// The pledge acknowledgment dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    has_message_area: bool,
    has_close_control: bool,
    message: Option<String>,
    visible: bool,
    aria_hidden: bool,
}

impl Modal {
    fn new(has_message_area: bool, has_close_control: bool) -> Self {
        Self {
            has_message_area,
            has_close_control,
            message: None,
            visible: false,
            aria_hidden: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn has_close_control(&self) -> bool {
        self.has_close_control
    }

    fn show(&mut self, message: String) {
        self.message = Some(message);
        self.visible = true;
        self.aria_hidden = false;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.aria_hidden = true;
    }
}

/// Volunteer pledge form with its confirmation region and optional modal.
#[derive(Debug)]
pub struct PledgeSubmission {
    pub name: String,
    pub email: String,
    interests: Vec<String>,
    checked: Vec<bool>,
    confirmation: Option<String>,
    modal: Option<Modal>,
}

impl PledgeSubmission {
    /// Requires the form and its confirmation region. The modal is optional.
    pub fn init(page: &Page) -> Option<Self> {
        let region = page.pledge.as_ref()?;
        if !region.confirmation {
            return None;
        }

        Some(Self {
            name: String::new(),
            email: String::new(),
            checked: vec![false; region.interests.len()],
            interests: region.interests.clone(),
            confirmation: None,
            modal: region.modal.as_ref().map(|m| Modal::new(m.message, m.close)),
        })
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn is_checked(&self, interest: usize) -> bool {
        self.checked.get(interest).copied().unwrap_or(false)
    }

    /// Flip the interest checkbox at `interest`.
    pub fn toggle_interest(&mut self, interest: usize) {
        if let Some(checked) = self.checked.get_mut(interest) {
            *checked = !*checked;
        }
    }

    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal.as_ref().is_some_and(Modal::is_visible)
    }

    /// Submit the pledge. Always accepted; the form is reset afterwards.
    pub fn on_submit(&mut self) -> PledgeSubmissionRecord {
        let interests = self
            .interests
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(interest, _)| interest.clone())
            .collect();
        let record = PledgeSubmissionRecord::from_input(&self.name, &self.email, interests);

        self.confirmation = Some(record.confirmation_text());

        if let Some(modal) = self.modal.as_mut().filter(|m| m.has_message_area) {
            modal.show(record.modal_text());
        }

        info!(name = %record.name, interests = record.interests.len(), "Pledge recorded");
        self.reset();
        record
    }

    /// Close control. Only wired when the modal has one.
    pub fn on_close_click(&mut self) {
        if let Some(modal) = self.modal.as_mut().filter(|m| m.has_close_control) {
            debug!("Pledge modal closed");
            modal.hide();
        }
    }

    /// A click inside the modal area. Only a click on the backdrop dismisses.
    pub fn on_modal_click(&mut self, target: ModalClickTarget) {
        if target == ModalClickTarget::Backdrop {
            self.on_close_click();
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.checked.iter_mut().for_each(|c| *c = false);
    }
}
