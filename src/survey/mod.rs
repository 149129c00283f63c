/// Survey wizard module
///
/// Step-sequenced data entry for the churn survey form.
///
/// ## Architecture
///
/// ```text
/// SurveyFlow
///   ├── SurveyField (enum of all fourteen fields, fixed order)
///   ├── RuleSet (format rules compiled once)
///   ├── SurveyState (active field, values, errors, result)
///   └── Navigation (advance, retreat, validate)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use churn_survey::survey::{NavigationResult, SurveyFlow};
///
/// let mut flow = SurveyFlow::new()?;
///
/// // Enter a value for the active field, then try to move forward
/// flow.set_value(flow.active_field(), "AL");
/// match flow.advance() {
///     NavigationResult::Success(field) => {
///         // Render the next field
///     }
///     NavigationResult::Blocked { reason } => {
///         // Show the inline validation error
///     }
/// }
/// ```
///
/// Forward navigation is gated on the active field's format rule; retreating
/// never validates. On the last field the submit action replaces forward
/// navigation (see the `messaging` module).

pub mod fields;
pub mod flow;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use fields::SurveyField;
pub use flow::{NavigationResult, SurveyFlow};
pub use rules::{RuleSet, ValueRule};
pub use state::SurveyState;
