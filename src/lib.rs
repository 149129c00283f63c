//! Churn Survey
//!
//! A wizard-style data-entry form for telecom customer records. The survey
//! walks through fourteen fields one step at a time, validates each value
//! against its format rule, and submits the completed record to a remote
//! churn-prediction endpoint.

pub mod config;
pub mod error;
pub mod messaging;
pub mod submit;
pub mod survey;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppResult, ConfigError, RegistryError, SubmitError};
pub use messaging::{CommandResult, SurveyCommand, SurveyEvent, SurveyExecutor};
pub use submit::PredictClient;
pub use survey::{NavigationResult, RuleSet, SurveyField, SurveyFlow, SurveyState, ValueRule};
