use crate::booking::form::{LeadDraft, LocationType, ValidLead};
use crate::booking::submission::{Delivery, SubmitError, RETRY_PROMPT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Success(Delivery),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    City,
}

/// State of an open booking modal. Whether the modal is open at all is owned
/// by the page that renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadFormState {
    pub draft: LeadDraft,
    pub phase: Phase,
    pub error: Option<String>,
}

impl Default for LeadFormState {
    fn default() -> Self {
        Self {
            draft: LeadDraft::default(),
            phase: Phase::Editing,
            error: None,
        }
    }
}

impl LeadFormState {
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::City => self.draft.city = value,
        }
        self.error = None;
    }

    pub fn select_location(&mut self, location_type: LocationType) {
        self.draft.location_type = Some(location_type);
        self.error = None;
    }

    /// Moves to `Submitting` and hands back the lead when every rule passes.
    /// Otherwise the first failing rule's message is shown and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<ValidLead> {
        if self.phase != Phase::Editing {
            return None;
        }
        match self.draft.validate() {
            Ok(lead) => {
                self.phase = Phase::Submitting;
                self.error = None;
                Some(lead)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn settle(&mut self, outcome: &Result<Delivery, SubmitError>) {
        match outcome {
            Ok(delivery) => {
                self.phase = Phase::Success(*delivery);
                self.error = None;
            }
            Err(_) => {
                self.phase = Phase::Editing;
                self.error = Some(RETRY_PROMPT.to_string());
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_success(&self) -> bool {
        matches!(self.phase, Phase::Success(_))
    }

    /// Backdrop and close control are ignored once the confirmation is showing.
    pub fn can_dismiss(&self) -> bool {
        !self.is_success()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadFormState {
        let mut state = LeadFormState::default();
        state.edit(Field::Name, "Jo".into());
        state.edit(Field::Email, "jo@example.com".into());
        state.edit(Field::City, "NYC".into());
        state.select_location(LocationType::AtOurOffice);
        state
    }

    #[test]
    fn invalid_submit_stays_editing_with_message() {
        let mut state = filled();
        state.edit(Field::Name, String::new());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.error.as_deref(), Some("Please enter your name"));
    }

    #[test]
    fn editing_clears_the_error() {
        let mut state = LeadFormState::default();
        state.begin_submit();
        assert!(state.error.is_some());
        state.edit(Field::Name, "J".into());
        assert!(state.error.is_none());
    }

    #[test]
    fn valid_submit_enters_submitting_once() {
        let mut state = filled();
        assert!(state.begin_submit().is_some());
        assert!(state.is_submitting());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn confirmed_delivery_shows_success_and_blocks_dismissal() {
        let mut state = filled();
        state.begin_submit();
        state.settle(&Ok(Delivery::Confirmed));
        assert_eq!(state.phase, Phase::Success(Delivery::Confirmed));
        assert!(!state.can_dismiss());
    }

    #[test]
    fn local_only_delivery_is_still_success() {
        let mut state = filled();
        state.begin_submit();
        state.settle(&Ok(Delivery::LocalOnly));
        assert!(state.is_success());
    }

    #[test]
    fn failed_dispatch_returns_to_editing_with_retry_prompt() {
        let mut state = filled();
        state.begin_submit();
        state.settle(&Err(SubmitError::Rejected(500)));
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.error.as_deref(), Some(RETRY_PROMPT));
        assert!(state.can_dismiss());
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn reset_clears_fields_and_selection() {
        let mut state = filled();
        state.begin_submit();
        state.settle(&Ok(Delivery::Confirmed));
        state.reset();
        assert_eq!(state, LeadFormState::default());
        assert_eq!(state.draft.location_type, None);
    }
}
