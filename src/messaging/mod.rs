/// Messaging module for Event/Command architecture
///
/// This module implements the Event/Command segregation pattern:
/// - **Events**: Notifications of things that happened (past tense)
/// - **Commands**: Requests to perform actions (imperative)
///
/// ## Architecture
///
/// ```text
/// ┌──────────┐    Command     ┌──────────┐     Event      ┌──────────┐
/// │ Frontend │ ─────────────> │ Executor │ ─────────────> │ Frontend │
/// └──────────┘                └──────────┘                └──────────┘
///                                  │
///                                  │ Submit (background thread)
///                                  ▼
///                            ┌──────────────┐
///                            │ PredictClient│
///                            └──────────────┘
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let executor = SurveyExecutor::new(flow, client);
/// let events = executor.events();
///
/// executor.apply(SurveyCommand::SetValue {
///     field: SurveyField::State,
///     value: "AL".to_string(),
/// });
/// executor.apply(SurveyCommand::Advance);
///
/// while let Ok(event) = events.recv() {
///     match event {
///         SurveyEvent::PredictionReceived { label } => { /* show result */ }
///         _ => {}
///     }
/// }
/// ```
///
/// Every command except `Submit` is applied synchronously on the calling
/// thread. `Submit` dispatches the network call to a one-shot background
/// thread and reports its outcome as an event, so navigation and input are
/// never blocked by a pending request.

pub mod commands;
pub mod events;
pub mod executor;

// Re-export commonly used types
pub use commands::{CommandResult, SurveyCommand};
pub use events::SurveyEvent;
pub use executor::SurveyExecutor;
