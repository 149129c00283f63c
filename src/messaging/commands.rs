/// Command types for the survey session
///
/// Commands represent requests to perform actions (imperative).
/// They are applied by the survey executor.

use crate::survey::SurveyField;

/// Survey commands
#[derive(Debug, Clone)]
pub enum SurveyCommand {
    /// Store a value for a field, clearing its inline error
    SetValue { field: SurveyField, value: String },

    /// Move to the next field (validates the active field)
    Advance,

    /// Move to the previous field (never validates)
    Retreat,

    /// Validate everything and submit the record to the prediction endpoint
    Submit,

    /// End the session
    Quit,
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command applied successfully
    Success,

    /// Command refused with a user-facing reason
    Rejected(String),
}

impl SurveyCommand {
    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            SurveyCommand::SetValue { field, .. } => {
                format!("Set value: {}", field.key())
            }
            SurveyCommand::Advance => "Advance to next step".to_string(),
            SurveyCommand::Retreat => "Return to previous step".to_string(),
            SurveyCommand::Submit => "Submit survey".to_string(),
            SurveyCommand::Quit => "Quit session".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_description() {
        let cmd = SurveyCommand::Advance;
        assert_eq!(cmd.description(), "Advance to next step");

        let cmd = SurveyCommand::SetValue {
            field: SurveyField::State,
            value: "AL".to_string(),
        };
        assert_eq!(cmd.description(), "Set value: State");
    }
}
