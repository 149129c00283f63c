/// Survey command executor
///
/// Applies commands to the shared survey state and emits events on completion.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use super::commands::{CommandResult, SurveyCommand};
use super::events::SurveyEvent;
use crate::submit::{PredictClient, FAILURE_NOTICE, INCOMPLETE_NOTICE};
use crate::survey::{NavigationResult, SurveyFlow};

/// Command executor for one survey session
///
/// The form state is shared with submission threads behind a lock; every
/// command except `Submit` is applied synchronously on the calling thread.
pub struct SurveyExecutor {
    flow: Arc<RwLock<SurveyFlow>>,
    client: Arc<PredictClient>,
    event_tx: Sender<SurveyEvent>,
    event_rx: Receiver<SurveyEvent>,
}

impl SurveyExecutor {
    /// Create an executor for a flow and a prediction client
    pub fn new(flow: SurveyFlow, client: PredictClient) -> Self {
        let (event_tx, event_rx) = unbounded();

        Self {
            flow: Arc::new(RwLock::new(flow)),
            client: Arc::new(client),
            event_tx,
            event_rx,
        }
    }

    /// Get a handle to the shared flow for rendering
    pub fn flow(&self) -> Arc<RwLock<SurveyFlow>> {
        Arc::clone(&self.flow)
    }

    /// Get a receiver for session events
    pub fn events(&self) -> Receiver<SurveyEvent> {
        self.event_rx.clone()
    }

    /// Apply a command
    pub fn apply(&self, command: SurveyCommand) -> CommandResult {
        tracing::debug!("Applying command: {}", command.description());

        match command {
            SurveyCommand::SetValue { field, value } => {
                self.flow.write().set_value(field, value);
                self.emit(SurveyEvent::ValueChanged { field });
                CommandResult::Success
            }

            SurveyCommand::Advance => {
                let outcome = self.flow.write().advance();
                match outcome {
                    NavigationResult::Success(field) => {
                        self.emit(SurveyEvent::StepEntered { field });
                        CommandResult::Success
                    }
                    NavigationResult::Blocked { reason } => {
                        // Blocked either by validation (inline error recorded)
                        // or by the last-step boundary; only the former is a
                        // field rejection.
                        let (field, rejected) = {
                            let guard = self.flow.read();
                            let field = guard.active_field();
                            (field, guard.state().error(field).is_some())
                        };
                        if rejected {
                            self.emit(SurveyEvent::FieldRejected {
                                field,
                                message: reason.clone(),
                            });
                        }
                        CommandResult::Rejected(reason)
                    }
                }
            }

            SurveyCommand::Retreat => {
                let outcome = self.flow.write().retreat();
                match outcome {
                    NavigationResult::Success(field) => {
                        self.emit(SurveyEvent::StepEntered { field });
                        CommandResult::Success
                    }
                    NavigationResult::Blocked { reason } => CommandResult::Rejected(reason),
                }
            }

            SurveyCommand::Submit => self.submit(),

            SurveyCommand::Quit => {
                self.emit(SurveyEvent::Shutdown);
                CommandResult::Success
            }
        }
    }

    /// Re-validate the whole form, then dispatch the request to a one-shot
    /// background thread.
    ///
    /// No in-flight guard: a second submission may be dispatched while one is
    /// outstanding.
    fn submit(&self) -> CommandResult {
        if !self.flow.read().validate_all() {
            tracing::warn!("Submission blocked: at least one field is invalid");
            self.emit(SurveyEvent::SubmissionBlocked);
            return CommandResult::Rejected(INCOMPLETE_NOTICE.to_string());
        }

        self.emit(SurveyEvent::SubmissionStarted);

        // Snapshot the record before spawning so input stays unblocked while
        // the request is in flight.
        let record = PredictClient::payload(self.flow.read().state());
        let flow = Arc::clone(&self.flow);
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();

        thread::spawn(move || match client.predict(record) {
            Ok(label) => {
                flow.write().reset();
                let _ = event_tx.send(SurveyEvent::PredictionReceived { label });
                let _ = event_tx.send(SurveyEvent::FormCleared);
            }
            Err(e) => {
                tracing::error!("Submission failed: {}", e);
                flow.write().state_mut().set_prediction(FAILURE_NOTICE);
                let _ = event_tx.send(SurveyEvent::SubmissionFailed {
                    message: FAILURE_NOTICE.to_string(),
                });
            }
        });

        CommandResult::Success
    }

    fn emit(&self, event: SurveyEvent) {
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::SurveyField;

    fn executor() -> SurveyExecutor {
        let flow = SurveyFlow::new().unwrap();
        // Port 1 is never routable from tests; submission must be blocked
        // before any network traffic in every test below.
        let client = PredictClient::new("http://127.0.0.1:1/predict");
        SurveyExecutor::new(flow, client)
    }

    #[test]
    fn test_set_value_emits_event() {
        let executor = executor();
        let events = executor.events();

        let result = executor.apply(SurveyCommand::SetValue {
            field: SurveyField::State,
            value: "AL".to_string(),
        });

        assert_eq!(result, CommandResult::Success);
        assert_eq!(
            events.try_recv().unwrap(),
            SurveyEvent::ValueChanged {
                field: SurveyField::State
            }
        );
        assert_eq!(executor.flow().read().state().value(SurveyField::State), "AL");
    }

    #[test]
    fn test_advance_success_emits_step_entered() {
        let executor = executor();
        let events = executor.events();

        executor.apply(SurveyCommand::SetValue {
            field: SurveyField::State,
            value: "TX".to_string(),
        });
        let result = executor.apply(SurveyCommand::Advance);

        assert_eq!(result, CommandResult::Success);
        let _ = events.try_recv(); // ValueChanged
        assert_eq!(
            events.try_recv().unwrap(),
            SurveyEvent::StepEntered {
                field: SurveyField::AccountLength
            }
        );
    }

    #[test]
    fn test_advance_rejection_emits_field_rejected() {
        let executor = executor();
        let events = executor.events();

        let result = executor.apply(SurveyCommand::Advance);
        assert_eq!(
            result,
            CommandResult::Rejected("State is invalid. Please enter a valid value.".to_string())
        );
        assert_eq!(
            events.try_recv().unwrap(),
            SurveyEvent::FieldRejected {
                field: SurveyField::State,
                message: "State is invalid. Please enter a valid value.".to_string()
            }
        );
    }

    #[test]
    fn test_retreat_at_first_step_is_rejected_without_event() {
        let executor = executor();
        let events = executor.events();

        let result = executor.apply(SurveyCommand::Retreat);
        assert_eq!(
            result,
            CommandResult::Rejected("Already at first step".to_string())
        );
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_submit_with_invalid_form_is_blocked() {
        let executor = executor();
        let events = executor.events();

        let result = executor.apply(SurveyCommand::Submit);
        assert_eq!(result, CommandResult::Rejected(INCOMPLETE_NOTICE.to_string()));
        assert_eq!(events.try_recv().unwrap(), SurveyEvent::SubmissionBlocked);
        // No SubmissionStarted: nothing was dispatched
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_quit_emits_shutdown() {
        let executor = executor();
        let events = executor.events();

        let result = executor.apply(SurveyCommand::Quit);
        assert_eq!(result, CommandResult::Success);
        assert_eq!(events.try_recv().unwrap(), SurveyEvent::Shutdown);
    }
}
