use super::entry::{Field, MissingField, WaitlistEntry};
use super::submit::SubmissionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Missing(MissingField),
}

/// Everything the waitlist view renders from. The component only forwards
/// messages here and owns the side effects (request, timer, confetti).
#[derive(Clone, Debug, PartialEq)]
pub struct WaitlistModel {
    pub entry: WaitlistEntry,
    pub state: SubmissionState,
    confirmation_id: u32,
}

impl Default for WaitlistModel {
    fn default() -> Self {
        Self {
            entry: WaitlistEntry::default(),
            state: SubmissionState::Idle,
            confirmation_id: 0,
        }
    }
}

impl WaitlistModel {
    pub fn edit(&mut self, field: Field, value: String) {
        self.entry = self.entry.with_field(field, value);
    }

    /// Idle (or a confirmation still on screen) -> Submitting. Hands back the
    /// snapshot that should go on the wire.
    pub fn begin_submit(&mut self) -> Result<WaitlistEntry, SubmitBlocked> {
        if self.state == SubmissionState::Submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.entry.payload().map_err(SubmitBlocked::Missing)?;

        self.state = SubmissionState::Submitting;
        Ok(self.entry.clone())
    }

    /// Submitting -> Succeeded | Failed. Returns the id of the confirmation
    /// now showing, or `None` if nothing was in flight.
    pub fn finish(&mut self, outcome: &Result<(), SubmissionError>) -> Option<u32> {
        if self.state != SubmissionState::Submitting {
            return None;
        }

        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.entry = WaitlistEntry::default();
            }
            Err(_) => self.state = SubmissionState::Failed,
        }
        self.confirmation_id = self.confirmation_id.wrapping_add(1);
        Some(self.confirmation_id)
    }

    /// Succeeded | Failed -> Idle, but only for the confirmation that is
    /// actually on screen. A timer left over from an earlier one is a no-op.
    pub fn dismiss(&mut self, confirmation_id: u32) -> bool {
        if confirmation_id != self.confirmation_id || !self.confirmation_visible() {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    pub fn confirmation_id(&self) -> u32 {
        self.confirmation_id
    }

    pub fn confirmation_visible(&self) -> bool {
        matches!(self.state, SubmissionState::Succeeded | SubmissionState::Failed)
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting..."
        } else {
            "Request Access"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::entry::Role;
    use crate::waitlist::submit::outcome;

    fn filled() -> WaitlistModel {
        let mut model = WaitlistModel::default();
        model.edit(Field::Name, "Jane Doe".to_string());
        model.edit(Field::Email, "jane@clinic.org".to_string());
        model.edit(Field::Role, "Dentist".to_string());
        model.edit(Field::Organization, "Acme Dental".to_string());
        model
    }

    #[test]
    fn accepted_submission_clears_form() {
        let mut model = filled();

        let sent = model.begin_submit().unwrap();
        assert_eq!(model.state, SubmissionState::Submitting);
        assert_eq!(sent.role, Some(Role::Dentist));

        let id = model.finish(&outcome(200)).unwrap();
        assert_eq!(model.state, SubmissionState::Succeeded);
        assert_eq!(model.entry, WaitlistEntry::default());
        assert!(model.confirmation_visible());

        assert!(model.dismiss(id));
        assert_eq!(model.state, SubmissionState::Idle);
        assert!(!model.confirmation_visible());
    }

    #[test]
    fn server_error_keeps_fields() {
        let mut model = filled();
        let before = model.entry.clone();

        model.begin_submit().unwrap();
        let id = model.finish(&outcome(500)).unwrap();

        assert_eq!(model.state, SubmissionState::Failed);
        assert_eq!(model.entry, before);
        assert!(model.confirmation_visible());

        assert!(model.dismiss(id));
        assert_eq!(model.state, SubmissionState::Idle);
        assert_eq!(model.entry, before);
    }

    #[test]
    fn network_error_is_the_same_failure() {
        let mut model = filled();
        model.begin_submit().unwrap();
        model.finish(&Err(SubmissionError::Network("offline".to_string())));

        assert_eq!(model.state, SubmissionState::Failed);
        assert_eq!(model.entry.name, "Jane Doe");
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut model = filled();
        model.begin_submit().unwrap();

        assert_eq!(model.begin_submit(), Err(SubmitBlocked::InFlight));
        assert_eq!(model.button_label(), "Submitting...");
    }

    #[test]
    fn missing_role_never_leaves_idle() {
        let mut model = filled();
        model.edit(Field::Role, String::new());

        assert_eq!(
            model.begin_submit(),
            Err(SubmitBlocked::Missing(MissingField::Role))
        );
        assert_eq!(model.state, SubmissionState::Idle);
    }

    #[test]
    fn whitespace_name_still_submits() {
        let mut model = filled();
        model.edit(Field::Name, "   ".to_string());

        assert!(model.begin_submit().is_ok());
        assert_eq!(model.state, SubmissionState::Submitting);
    }

    #[test]
    fn stale_dismiss_is_ignored() {
        let mut model = filled();
        model.begin_submit().unwrap();
        let first = model.finish(&Err(SubmissionError::Status(502))).unwrap();

        // Retry while the first confirmation is still up.
        model.begin_submit().unwrap();
        let second = model.finish(&Ok(())).unwrap();
        assert_ne!(first, second);

        assert!(!model.dismiss(first));
        assert_eq!(model.state, SubmissionState::Succeeded);
        assert!(model.dismiss(second));
    }

    #[test]
    fn late_response_without_submit_is_ignored() {
        let mut model = filled();
        assert_eq!(model.finish(&Ok(())), None);
        assert_eq!(model.state, SubmissionState::Idle);
        assert_eq!(model.entry.name, "Jane Doe");
    }
}
