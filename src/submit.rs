use serde::Deserialize;
use serde_json::Value;

use crate::error::SubmitError;
use crate::survey::{SurveyField, SurveyState};

/// Generic notice shown when submission is refused because a field is invalid
pub const INCOMPLETE_NOTICE: &str = "Please fill all fields correctly.";

/// Generic result recorded when the prediction request fails
pub const FAILURE_NOTICE: &str = "Error occurred while predicting.";

/// Prediction endpoint response structure
#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: String, // classification label, e.g. "Churn"
}

/// Client for the churn-prediction endpoint
///
/// One blocking POST per submission. No retry, no timeout, no cancellation of
/// an in-flight request.
pub struct PredictClient {
    url: String,
}

impl PredictClient {
    /// Create a client for the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Get the endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the request body: one JSON object with every field key mapped to
    /// its raw text value, in entry order.
    pub fn payload(state: &SurveyState) -> Value {
        let mut body = serde_json::Map::with_capacity(SurveyField::total());
        for (key, value) in state.entries() {
            body.insert(key.to_string(), Value::String(value.to_string()));
        }
        Value::Object(body)
    }

    /// Submit a completed record and return the prediction label
    pub fn predict(&self, record: Value) -> Result<String, SubmitError> {
        tracing::info!("[predict] Submitting record to {}", self.url);

        let response = match ureq::post(&self.url)
            .set("Content-Type", "application/json")
            .send_json(record)
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => {
                tracing::error!("[predict] Endpoint returned status {}", code);
                return Err(SubmitError::BadStatus(code));
            }
            Err(e) => {
                tracing::error!("[predict] Network error: {}", e);
                return Err(SubmitError::Transport(Box::new(e)));
            }
        };

        let parsed: PredictResponse = response
            .into_json()
            .map_err(|e| SubmitError::MalformedResponse(Box::new(e)))?;

        tracing::info!("[predict] Prediction received: {}", parsed.prediction);
        Ok(parsed.prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_has_one_entry_per_field() {
        let state = SurveyState::new();
        let payload = PredictClient::payload(&state);

        let object = payload.as_object().unwrap();
        assert_eq!(object.len(), SurveyField::total());
        for field in SurveyField::all() {
            assert_eq!(object.get(field.key()), Some(&Value::String(String::new())));
        }
    }

    #[test]
    fn test_payload_carries_raw_text_values() {
        let mut state = SurveyState::new();
        state.set_value(SurveyField::State, "AL");
        state.set_value(SurveyField::DayMinutes, "120.4");

        let payload = PredictClient::payload(&state);
        assert_eq!(payload["State"], "AL");
        // Values stay strings, never coerced to numbers
        assert_eq!(payload["Total_day_minutes"], "120.4");
    }

    #[test]
    fn test_response_parsing() {
        let parsed: PredictResponse =
            serde_json::from_str(r#"{"prediction": "Churn"}"#).unwrap();
        assert_eq!(parsed.prediction, "Churn");

        // Extra fields are tolerated, a missing prediction is not
        let parsed: PredictResponse =
            serde_json::from_str(r#"{"prediction": "No Churn", "confidence": 0.93}"#).unwrap();
        assert_eq!(parsed.prediction, "No Churn");

        assert!(serde_json::from_str::<PredictResponse>(r#"{"label": "Churn"}"#).is_err());
    }
}
