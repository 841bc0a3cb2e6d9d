use std::rc::Rc;

use yew::Reducible;

use super::applicant::{ApplicantField, ApplicantRecord};
use super::prediction::{Prediction, PredictionError};
use super::validation::{validate_record, ValidationErrors, INCOMPLETE_FORM_MESSAGE};

pub const INCOMPLETE_IDENTITY_MESSAGE: &str = "Please enter your first and last name.";

/// Where the assessment currently is. `Failed` keeps the form usable, like
/// `Idle`, but remembers what went wrong.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Stage {
    #[default]
    Idle,
    CollectingIdentity,
    /// Carries the exact body that goes out with the request.
    Submitting(ApplicantRecord),
    ShowingResult(Prediction),
    Failed(String),
}

impl Stage {
    pub fn open_identity(&self) -> Option<Stage> {
        match self {
            Stage::Idle | Stage::Failed(_) => Some(Stage::CollectingIdentity),
            _ => None,
        }
    }

    pub fn begin_submission(&self, record: &ApplicantRecord) -> Option<Stage> {
        match self {
            Stage::CollectingIdentity => Some(Stage::Submitting(record.clone())),
            _ => None,
        }
    }

    pub fn cancel_identity(&self) -> Option<Stage> {
        match self {
            Stage::CollectingIdentity => Some(Stage::Idle),
            _ => None,
        }
    }

    /// Outcome of the request. Only meaningful while `Submitting`; a late
    /// answer after a reset is dropped.
    pub fn complete(&self, outcome: Result<Prediction, PredictionError>) -> Option<Stage> {
        if !self.is_busy() {
            return None;
        }
        Some(match outcome {
            Ok(prediction) => Stage::ShowingResult(prediction),
            Err(err) => Stage::Failed(err.user_message().to_string()),
        })
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Stage::Submitting(_))
    }

    pub fn pending_request(&self) -> Option<&ApplicantRecord> {
        match self {
            Stage::Submitting(record) => Some(record),
            _ => None,
        }
    }

    pub fn shows_identity_modal(&self) -> bool {
        matches!(self, Stage::CollectingIdentity | Stage::Submitting(_))
    }

    pub fn prediction(&self) -> Option<Prediction> {
        match self {
            Stage::ShowingResult(prediction) => Some(*prediction),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Stage::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Name shown on the result screen. Never sent anywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Everything the assessment view owns between mount and unmount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssessmentSession {
    pub record: ApplicantRecord,
    pub errors: ValidationErrors,
    pub identity: Identity,
    pub banner: Option<&'static str>,
    pub stage: Stage,
}

impl AssessmentSession {
    pub fn update_field(&mut self, field: ApplicantField, value: String) {
        self.errors.revalidate_field(field, &value);
        self.record.set(field, value);
    }

    /// Returns true when the identity modal opened.
    pub fn submit_form(&mut self) -> bool {
        let Some(next) = self.stage.open_identity() else {
            return false;
        };
        self.errors = validate_record(&self.record);
        if !self.errors.is_empty() {
            self.banner = Some(INCOMPLETE_FORM_MESSAGE);
            self.stage = Stage::Idle;
            return false;
        }
        self.banner = None;
        self.stage = next;
        true
    }

    /// Hands back the body to send, at most once per opened identity modal.
    pub fn submit_identity(&mut self) -> Option<ApplicantRecord> {
        let next = self.stage.begin_submission(&self.record)?;
        if !self.identity.is_complete() {
            self.banner = Some(INCOMPLETE_IDENTITY_MESSAGE);
            return None;
        }
        self.banner = None;
        self.stage = next;
        self.stage.pending_request().cloned()
    }

    pub fn cancel_identity(&mut self) {
        if let Some(next) = self.stage.cancel_identity() {
            self.banner = None;
            self.stage = next;
        }
    }

    pub fn finish(&mut self, outcome: Result<Prediction, PredictionError>) {
        if let Some(next) = self.stage.complete(outcome) {
            self.stage = next;
        }
    }

    pub fn reset(&mut self) {
        *self = AssessmentSession::default();
    }
}

pub enum AssessmentAction {
    SetField(ApplicantField, String),
    SetFirstName(String),
    SetLastName(String),
    SubmitForm,
    SubmitIdentity,
    CancelIdentity,
    Finish(Result<Prediction, PredictionError>),
    Reset,
}

impl Reducible for AssessmentSession {
    type Action = AssessmentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AssessmentAction::SetField(field, value) => next.update_field(field, value),
            AssessmentAction::SetFirstName(value) => next.identity.first_name = value,
            AssessmentAction::SetLastName(value) => next.identity.last_name = value,
            AssessmentAction::SubmitForm => {
                next.submit_form();
            }
            AssessmentAction::SubmitIdentity => {
                next.submit_identity();
            }
            AssessmentAction::CancelIdentity => next.cancel_identity(),
            AssessmentAction::Finish(outcome) => next.finish(outcome),
            AssessmentAction::Reset => next.reset(),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> AssessmentSession {
        let mut session = AssessmentSession::default();
        for field in ApplicantField::ALL {
            if session.record.get(field).is_empty() {
                session.update_field(field, "3".to_string());
            }
        }
        session
    }

    fn named(mut session: AssessmentSession) -> AssessmentSession {
        session.identity = Identity {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        };
        session
    }

    #[test]
    fn any_single_empty_field_blocks_submission() {
        for field in ApplicantField::ALL {
            let mut session = filled_session();
            session.update_field(field, String::new());

            assert!(!session.submit_form(), "{} empty must block", field.key());
            assert_eq!(session.stage, Stage::Idle);
            assert_eq!(session.banner, Some(INCOMPLETE_FORM_MESSAGE));
            assert_eq!(session.errors.fields().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn typing_clears_the_field_error() {
        let mut session = AssessmentSession::default();
        session.submit_form();
        assert!(session.errors.message(ApplicantField::Age).is_some());

        session.update_field(ApplicantField::Age, "35".into());
        assert_eq!(session.errors.message(ApplicantField::Age), None);
        assert_eq!(session.record.get(ApplicantField::Age), "35");
    }

    #[test]
    fn valid_form_opens_identity_then_yields_one_snapshot() {
        let mut session = filled_session();
        assert!(session.submit_form());
        assert!(session.stage.shows_identity_modal());

        let mut session = named(session);
        let expected = session.record.clone();

        let snapshot = session.submit_identity().expect("first name submit sends");
        assert_eq!(snapshot, expected);
        assert!(session.stage.is_busy());

        assert_eq!(session.submit_identity(), None, "second click while in flight is ignored");
        assert!(!session.submit_form(), "form submit is ignored while in flight");
    }

    #[test]
    fn blank_identity_does_not_send() {
        let mut session = filled_session();
        session.submit_form();
        session.identity.first_name = "  ".into();
        session.identity.last_name = "Hopper".into();

        assert_eq!(session.submit_identity(), None);
        assert_eq!(session.stage, Stage::CollectingIdentity);
        assert_eq!(session.banner, Some(INCOMPLETE_IDENTITY_MESSAGE));
    }

    #[test]
    fn identity_submit_requires_a_validated_form() {
        let mut session = named(filled_session());
        assert_eq!(session.submit_identity(), None);
        assert_eq!(session.stage, Stage::Idle);
    }

    #[test]
    fn successful_answer_shows_result() {
        let mut session = named(filled_session());
        session.submit_form();
        session.submit_identity();

        session.finish(Ok(Prediction::Approved));
        assert_eq!(session.stage.prediction(), Some(Prediction::Approved));
        assert!(!session.stage.shows_identity_modal());
    }

    #[test]
    fn failed_request_keeps_form_and_allows_retry() {
        let mut session = named(filled_session());
        session.submit_form();
        session.submit_identity();

        session.finish(Err(PredictionError::Status(500)));
        assert_eq!(session.stage.prediction(), None);
        assert!(!session.stage.shows_identity_modal());
        assert_eq!(
            session.stage.error_message(),
            Some(crate::assessment::prediction::GENERIC_FAILURE_MESSAGE)
        );

        assert!(session.submit_form(), "user may retry after a failure");
        assert!(session.submit_identity().is_some());
    }

    #[test]
    fn cancel_returns_to_idle_without_request() {
        let mut session = filled_session();
        session.submit_form();
        session.cancel_identity();
        assert_eq!(session.stage, Stage::Idle);
        assert_eq!(session.submit_identity(), None);
    }

    #[test]
    fn late_answer_after_reset_is_dropped() {
        let mut session = named(filled_session());
        session.submit_form();
        session.submit_identity();
        session.reset();

        session.finish(Ok(Prediction::Declined));
        assert_eq!(session, AssessmentSession::default());
    }

    #[test]
    fn reset_restores_defaults_and_closes_modals() {
        let mut session = named(filled_session());
        session.submit_form();
        session.submit_identity();
        session.finish(Ok(Prediction::Declined));

        session.reset();
        assert_eq!(session.record, ApplicantRecord::default());
        assert_eq!(session.identity, Identity::default());
        assert!(session.errors.is_empty());
        assert_eq!(session.banner, None);
        assert!(!session.stage.shows_identity_modal());
        assert_eq!(session.stage.prediction(), None);
    }

    #[test]
    fn fresh_session_starts_from_defaults() {
        let mut first = filled_session();
        first.submit_form();

        let revisited = AssessmentSession::default();
        assert_eq!(revisited.record, ApplicantRecord::default());
        assert_eq!(revisited.stage, Stage::Idle);
        assert_ne!(revisited, first);
    }

    #[test]
    fn reducer_drives_the_whole_flow() {
        let mut state = Rc::new(filled_session());
        for action in [
            AssessmentAction::SubmitForm,
            AssessmentAction::SetFirstName("Grace".into()),
            AssessmentAction::SetLastName("Hopper".into()),
            AssessmentAction::SubmitIdentity,
        ] {
            state = state.reduce(action);
        }
        assert!(state.stage.is_busy());
        assert_eq!(state.identity.display_name(), "Grace Hopper");

        state = state.reduce(AssessmentAction::SubmitIdentity);
        assert!(state.stage.is_busy());

        state = state.reduce(AssessmentAction::Finish(Ok(Prediction::Approved)));
        assert_eq!(state.stage, Stage::ShowingResult(Prediction::Approved));

        state = state.reduce(AssessmentAction::Reset);
        assert_eq!(*state, AssessmentSession::default());
    }

    #[test]
    fn edits_during_submission_do_not_change_the_sent_body() {
        let mut state = Rc::new(named(filled_session()));
        state = state.reduce(AssessmentAction::SetField(ApplicantField::Age, "41".into()));
        state = state.reduce(AssessmentAction::SubmitForm);
        state = state.reduce(AssessmentAction::SubmitIdentity);
        let submitted = state.record.clone();

        state = state.reduce(AssessmentAction::SetField(ApplicantField::Age, "99".into()));
        assert_eq!(state.record.get(ApplicantField::Age), "99");

        let pending = state.stage.pending_request().expect("request is pending");
        assert_eq!(pending, &submitted);
        assert_eq!(pending.get(ApplicantField::Age), "41");

        state = state.reduce(AssessmentAction::Finish(Err(PredictionError::Status(502))));
        assert_eq!(state.stage.pending_request(), None);
    }
}
