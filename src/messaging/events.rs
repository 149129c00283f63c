/// Event types for the survey session
///
/// Events represent things that have happened (past tense).
/// They are delivered to the frontend over the executor's event channel.

use crate::survey::SurveyField;

/// Survey events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyEvent {
    /// Navigation landed on a field
    StepEntered { field: SurveyField },

    /// A field's value was changed
    ValueChanged { field: SurveyField },

    /// The active field failed validation on advance
    FieldRejected { field: SurveyField, message: String },

    /// Submission refused before any network traffic: a field is invalid
    SubmissionBlocked,

    /// Submission dispatched to the prediction endpoint
    SubmissionStarted,

    /// The endpoint answered with a prediction label
    PredictionReceived { label: String },

    /// The request failed (transport, status or malformed response)
    SubmissionFailed { message: String },

    /// Form values, errors and result were reset for a new entry
    FormCleared,

    /// Session is shutting down
    Shutdown,
}

impl SurveyEvent {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            SurveyEvent::StepEntered { field } => {
                format!("Step {} of {}: {}", field.number(), SurveyField::total(), field)
            }
            SurveyEvent::ValueChanged { field } => {
                format!("Value changed: {}", field.key())
            }
            SurveyEvent::FieldRejected { message, .. } => message.clone(),
            SurveyEvent::SubmissionBlocked => crate::submit::INCOMPLETE_NOTICE.to_string(),
            SurveyEvent::SubmissionStarted => "Submitting survey".to_string(),
            SurveyEvent::PredictionReceived { label } => {
                format!("Prediction: {}", label)
            }
            SurveyEvent::SubmissionFailed { message } => message.clone(),
            SurveyEvent::FormCleared => "Form cleared".to_string(),
            SurveyEvent::Shutdown => "Shutting down".to_string(),
        }
    }
}
