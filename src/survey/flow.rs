/// Survey flow management
///
/// Gates navigation through the survey fields on per-field validation.

use super::fields::SurveyField;
use super::rules::RuleSet;
use super::state::SurveyState;
use crate::error::RegistryError;

/// Navigation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// Navigation succeeded, now on new field
    Success(SurveyField),

    /// Navigation blocked (at boundary or validation failed)
    Blocked { reason: String },
}

/// Survey flow manager
pub struct SurveyFlow {
    state: SurveyState,
    rules: RuleSet,
}

impl SurveyFlow {
    /// Create a new flow with a fresh session
    pub fn new() -> Result<Self, RegistryError> {
        Ok(Self {
            state: SurveyState::new(),
            rules: RuleSet::new()?,
        })
    }

    /// Get the survey state
    pub fn state(&self) -> &SurveyState {
        &self.state
    }

    /// Get the mutable survey state
    pub fn state_mut(&mut self) -> &mut SurveyState {
        &mut self.state
    }

    /// Get the active field
    pub fn active_field(&self) -> SurveyField {
        self.state.active_field()
    }

    /// Store a value for a field, clearing its inline error
    pub fn set_value(&mut self, field: SurveyField, value: impl Into<String>) {
        self.state.set_value(field, value);
    }

    /// Check one field's current value against its rule
    pub fn validate_field(&self, field: SurveyField) -> bool {
        self.rules.matches(field.rule(), self.state.value(field))
    }

    /// Check every field's current value against its rule
    pub fn validate_all(&self) -> bool {
        SurveyField::all()
            .into_iter()
            .all(|field| self.validate_field(field))
    }

    /// Navigate to the next field
    ///
    /// Allowed only when the active field's value passes its rule; a failure
    /// records the inline error and leaves the active field unchanged. On the
    /// last field the submit action replaces forward navigation, so advancing
    /// is refused there even with a valid value.
    pub fn advance(&mut self) -> NavigationResult {
        let current = self.active_field();

        if !self.validate_field(current) {
            let reason = format!("{} is invalid. Please enter a valid value.", current.label());
            self.state.record_error(current, reason.clone());
            tracing::debug!("Advance blocked on {}: value rejected", current.key());
            return NavigationResult::Blocked { reason };
        }

        match current.next() {
            Some(next) => {
                self.state.set_active_field(next);
                tracing::debug!("Advanced to step {} ({})", next.number(), next.key());
                NavigationResult::Success(next)
            }
            None => NavigationResult::Blocked {
                reason: "Already at the last step".to_string(),
            },
        }
    }

    /// Navigate to the previous field
    ///
    /// Never validates.
    pub fn retreat(&mut self) -> NavigationResult {
        let current = self.active_field();

        match current.previous() {
            Some(previous) => {
                self.state.set_active_field(previous);
                tracing::debug!("Retreated to step {} ({})", previous.number(), previous.key());
                NavigationResult::Success(previous)
            }
            None => NavigationResult::Blocked {
                reason: "Already at first step".to_string(),
            },
        }
    }

    /// Check if the user can go back
    pub fn can_go_back(&self) -> bool {
        !self.active_field().is_first()
    }

    /// Check if the user can go forward (submit replaces forward on the last field)
    pub fn can_go_forward(&self) -> bool {
        !self.active_field().is_last()
    }

    /// Check if the active field is the final step
    pub fn is_final_step(&self) -> bool {
        self.active_field().is_last()
    }

    /// Reset the session to the first field with empty values
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> SurveyFlow {
        SurveyFlow::new().unwrap()
    }

    #[test]
    fn test_new_flow() {
        let flow = flow();
        assert_eq!(flow.active_field(), SurveyField::State);
        assert!(!flow.can_go_back());
        assert!(flow.can_go_forward());
        assert!(!flow.is_final_step());
    }

    #[test]
    fn test_advance_with_valid_value() {
        let mut flow = flow();
        flow.set_value(SurveyField::State, "AL");

        let result = flow.advance();
        assert_eq!(result, NavigationResult::Success(SurveyField::AccountLength));
        assert_eq!(flow.active_field(), SurveyField::AccountLength);
        assert!(flow.can_go_back());
    }

    #[test]
    fn test_advance_with_invalid_value_blocks() {
        let mut flow = flow();
        flow.set_value(SurveyField::State, "Alabama");

        let result = flow.advance();
        assert_eq!(
            result,
            NavigationResult::Blocked {
                reason: "State is invalid. Please enter a valid value.".to_string()
            }
        );
        assert_eq!(flow.active_field(), SurveyField::State);
        assert_eq!(
            flow.state().error(SurveyField::State),
            Some("State is invalid. Please enter a valid value.")
        );
    }

    #[test]
    fn test_advance_with_empty_value_blocks() {
        let mut flow = flow();

        let result = flow.advance();
        assert!(matches!(result, NavigationResult::Blocked { .. }));
        assert_eq!(flow.active_field(), SurveyField::State);
    }

    #[test]
    fn test_set_value_clears_inline_error() {
        let mut flow = flow();
        flow.advance();
        assert!(flow.state().error(SurveyField::State).is_some());

        flow.set_value(SurveyField::State, "zz");
        assert!(flow.state().error(SurveyField::State).is_none());
    }

    #[test]
    fn test_retreat_never_validates() {
        let mut flow = flow();
        flow.set_value(SurveyField::State, "AL");
        flow.advance();

        // Leave the active field invalid, retreat must still succeed
        flow.set_value(SurveyField::AccountLength, "not a number");
        let result = flow.retreat();
        assert_eq!(result, NavigationResult::Success(SurveyField::State));
        assert!(flow.state().error(SurveyField::AccountLength).is_none());
    }

    #[test]
    fn test_retreat_at_first_step_blocks() {
        let mut flow = flow();
        let result = flow.retreat();
        assert_eq!(
            result,
            NavigationResult::Blocked {
                reason: "Already at first step".to_string()
            }
        );
    }

    #[test]
    fn test_final_step_replaces_forward_navigation() {
        let mut flow = flow();
        flow.state_mut().set_active_field(SurveyField::ServiceCalls);
        flow.set_value(SurveyField::ServiceCalls, "3");

        assert!(flow.is_final_step());
        assert!(!flow.can_go_forward());

        let result = flow.advance();
        assert_eq!(
            result,
            NavigationResult::Blocked {
                reason: "Already at the last step".to_string()
            }
        );
        assert_eq!(flow.active_field(), SurveyField::ServiceCalls);
    }

    #[test]
    fn test_validate_all() {
        let mut flow = flow();
        assert!(!flow.validate_all());

        for field in SurveyField::all() {
            let value = match field.rule() {
                crate::survey::ValueRule::RegionCode => "AL",
                crate::survey::ValueRule::Count => "42",
                crate::survey::ValueRule::YesNo => "Yes",
                crate::survey::ValueRule::Minutes => "42.5",
            };
            flow.set_value(field, value);
        }
        assert!(flow.validate_all());

        flow.set_value(SurveyField::VoiceMailPlan, "yes");
        assert!(!flow.validate_all());
    }

    #[test]
    fn test_full_walk() {
        let mut flow = flow();

        for field in SurveyField::all() {
            let value = match field.rule() {
                crate::survey::ValueRule::RegionCode => "TX",
                crate::survey::ValueRule::Count => "7",
                crate::survey::ValueRule::YesNo => "No",
                crate::survey::ValueRule::Minutes => "120.4",
            };
            flow.set_value(field, value);
            if field.is_last() {
                break;
            }
            assert_eq!(flow.advance(), NavigationResult::Success(field.next().unwrap()));
        }

        assert!(flow.is_final_step());
        assert!(flow.validate_all());
    }

    #[test]
    fn test_reset() {
        let mut flow = flow();
        flow.set_value(SurveyField::State, "AL");
        flow.advance();

        flow.reset();
        assert_eq!(flow.active_field(), SurveyField::State);
        assert_eq!(flow.state().value(SurveyField::State), "");
    }
}
