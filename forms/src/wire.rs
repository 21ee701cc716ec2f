//! JSON response shape shared by the submission API and its client.

use serde::{Deserialize, Serialize};

/// Body of every form-submission response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self { ok: true, error: None }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { ok: false, error: Some(message.into()) }
    }

    /// Collapse into the `Result` the UI feeds back into its form state.
    ///
    /// # Errors
    ///
    /// Returns the server's message, or a generic one if it sent none.
    pub fn into_result(self) -> Result<(), String> {
        if self.ok {
            Ok(())
        } else {
            Err(self.error.unwrap_or_else(|| "submission failed".to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_omits_error_field() {
        let json = serde_json::to_string(&SubmitResponse::ok()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn failed_response_into_result_keeps_message() {
        let resp: SubmitResponse = serde_json::from_str(r#"{"ok":false,"error":"relay down"}"#).unwrap();
        assert_eq!(resp.into_result(), Err("relay down".to_owned()));
    }

    #[test]
    fn failed_response_without_message_gets_generic_text() {
        let resp: SubmitResponse = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert_eq!(resp.into_result(), Err("submission failed".to_owned()));
    }
}
