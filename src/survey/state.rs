/// Survey session state
///
/// Holds the values, errors and result for one entry session.

use std::collections::{BTreeMap, HashMap};

use super::fields::SurveyField;

/// Survey state
///
/// `values` always holds exactly one entry per field key; `errors` holds an
/// entry only for fields whose last validation failed.
#[derive(Debug, Clone)]
pub struct SurveyState {
    /// Field currently shown to the user
    active_field: SurveyField,

    /// Raw text per field key, initialized empty
    values: BTreeMap<&'static str, String>,

    /// Inline error message per field key
    errors: HashMap<&'static str, String>,

    /// Outcome of the last submission, if any
    prediction: Option<String>,
}

impl SurveyState {
    /// Create a fresh session: first field active, all values empty
    pub fn new() -> Self {
        let values = SurveyField::all()
            .into_iter()
            .map(|field| (field.key(), String::new()))
            .collect();

        Self {
            active_field: SurveyField::default(),
            values,
            errors: HashMap::new(),
            prediction: None,
        }
    }

    /// Get the active field
    pub fn active_field(&self) -> SurveyField {
        self.active_field
    }

    /// Set the active field
    pub fn set_active_field(&mut self, field: SurveyField) {
        self.active_field = field;
    }

    /// Get the raw value for a field
    pub fn value(&self, field: SurveyField) -> &str {
        self.values
            .get(field.key())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Store a value for a field
    ///
    /// Clears any stored error for that field immediately, regardless of the
    /// new value's validity.
    pub fn set_value(&mut self, field: SurveyField, value: impl Into<String>) {
        self.values.insert(field.key(), value.into());
        self.errors.remove(field.key());
    }

    /// Get the stored error for a field, if any
    pub fn error(&self, field: SurveyField) -> Option<&str> {
        self.errors.get(field.key()).map(String::as_str)
    }

    /// Record a validation error for a field
    pub fn record_error(&mut self, field: SurveyField, message: impl Into<String>) {
        self.errors.insert(field.key(), message.into());
    }

    /// Check whether any field currently has a stored error
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the last submission outcome
    pub fn prediction(&self) -> Option<&str> {
        self.prediction.as_deref()
    }

    /// Record a submission outcome
    pub fn set_prediction(&mut self, label: impl Into<String>) {
        self.prediction = Some(label.into());
    }

    /// Iterate over (key, value) pairs in entry order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        SurveyField::all()
            .into_iter()
            .map(move |field| (field.key(), self.value(field)))
    }

    /// Reset to a fresh session
    ///
    /// Returns to the first field with all values empty, no errors and no
    /// result, so a new entry starts from step one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SurveyState {
    fn default() -> Self {
        Self::new()
    }
}
