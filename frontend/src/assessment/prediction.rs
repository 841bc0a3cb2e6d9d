use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

use super::applicant::ApplicantRecord;

pub const GENERIC_FAILURE_MESSAGE: &str = "Error fetching prediction. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prediction {
    Approved,
    Declined,
}

impl Prediction {
    pub fn badge(self) -> &'static str {
        match self {
            Prediction::Approved => "Approved – Low Risk",
            Prediction::Declined => "Declined – High Risk",
        }
    }

    pub fn narrative(self) -> &'static str {
        match self {
            Prediction::Approved => {
                "Based on the model’s analysis, the credit risk is classified as low. \
                 The applicant is highly likely to be approved for credit based on the data provided."
            }
            Prediction::Declined => {
                "Based on the model’s analysis, the credit risk is classified as high. \
                 The applicant is highly likely to be denied credit. Consider improving \
                 the financial profile for better chances in the future."
            }
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("could not encode applicant record: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("prediction service answered with status {0}")]
    Status(u16),
    #[error("response body is not JSON: {0}")]
    Decode(String),
}

impl PredictionError {
    /// Every failure reads the same to the applicant; the detail only goes to the log.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

/// Anything but an exact `"Yes"` label is treated as high risk.
pub fn interpret_body(body: &str) -> Result<Prediction, PredictionError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| PredictionError::Decode(e.to_string()))?;

    match value.get("prediction") {
        Some(Value::String(label)) if label == "Yes" => Ok(Prediction::Approved),
        Some(Value::String(label)) if label == "No" => Ok(Prediction::Declined),
        other => {
            tracing::warn!(label = ?other, "unexpected prediction label, treating as high risk");
            Ok(Prediction::Declined)
        }
    }
}

pub async fn request_prediction(
    url: &str,
    record: &ApplicantRecord,
) -> Result<Prediction, PredictionError> {
    tracing::debug!(url, "sending applicant record for prediction");

    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(record)
        .map_err(|e| PredictionError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| PredictionError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(PredictionError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| PredictionError::Decode(e.to_string()))?;
    interpret_body(&body)
}
