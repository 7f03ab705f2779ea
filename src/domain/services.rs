//! Interpretation of classifier responses into verdicts and user messages.

use super::errors::{ClassifyError, ClassifyResult};
use super::models::{ClassificationResult, ErrorMessage, PredictResponse};

/// Shown when the server reports failure without a reason.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Shown for every transport failure; the underlying detail is only logged.
pub const CONNECTION_ERROR_MESSAGE: &str = "Failed to connect to the server";

pub struct ResponseInterpreter;

impl ResponseInterpreter {
    /// Splits a structurally valid response into success or application failure.
    pub fn interpret(response: PredictResponse) -> ClassifyResult<ClassificationResult> {
        if response.success {
            Ok(ClassificationResult {
                sentiment: response.sentiment,
                extra: response.extra,
            })
        } else {
            Err(ClassifyError::Application(response.error))
        }
    }

    /// Parses a raw response body. Anything that is not a JSON object is a
    /// transport failure, not an application one.
    pub fn parse_body(body: &str) -> ClassifyResult<ClassificationResult> {
        let response = serde_json::from_str::<PredictResponse>(body)
            .map_err(|e| ClassifyError::Transport(format!("malformed response body: {e}")))?;
        Self::interpret(response)
    }

    /// The text the user sees for a failed submission.
    pub fn user_message(error: &ClassifyError) -> ErrorMessage {
        match error {
            ClassifyError::Application(reason) => {
                ErrorMessage::or_fallback(reason.as_deref(), GENERIC_ERROR_MESSAGE)
            }
            ClassifyError::Transport(_) => ErrorMessage::or_fallback(None, CONNECTION_ERROR_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_body() {
        let result = ResponseInterpreter::parse_body(
            r#"{"success": true, "sentiment": "positive", "confidence": 0.8}"#,
        )
        .unwrap();
        assert_eq!(result.sentiment, "positive");
        assert_eq!(result.extra.get("confidence"), Some(&json!(0.8)));
    }

    #[test]
    fn test_parse_success_without_sentiment_is_still_success() {
        let result = ResponseInterpreter::parse_body(r#"{"success": true}"#).unwrap();
        assert!(result.sentiment.is_empty());
        assert!(!result.is_positive());
    }

    #[test]
    fn test_parse_success_with_non_string_sentiment() {
        for body in [
            r#"{"success": true, "sentiment": null}"#,
            r#"{"success": true, "sentiment": 1}"#,
            r#"{"success": true, "sentiment": {"label": "positive"}}"#,
        ] {
            let result = ResponseInterpreter::parse_body(body).unwrap();
            assert!(!result.is_positive(), "body {body}");
        }
    }

    #[test]
    fn test_parse_truthy_success_flag() {
        let result = ResponseInterpreter::parse_body(r#"{"success": 1, "sentiment": "positive"}"#).unwrap();
        assert!(result.is_positive());

        let err = ResponseInterpreter::parse_body(r#"{"success": 0, "sentiment": "positive"}"#).unwrap_err();
        assert_eq!(err, ClassifyError::Application(None));
    }

    #[test]
    fn test_parse_non_string_error_is_application_failure() {
        let err = ResponseInterpreter::parse_body(r#"{"success": false, "error": {"code": 3}}"#).unwrap_err();
        assert!(matches!(err, ClassifyError::Application(Some(_))));
        assert_ne!(
            ResponseInterpreter::user_message(&err).as_str(),
            CONNECTION_ERROR_MESSAGE
        );

        let err = ResponseInterpreter::parse_body(r#"{"success": false, "error": null}"#).unwrap_err();
        assert_eq!(ResponseInterpreter::user_message(&err).as_str(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_server_reason_shown_as_sent() {
        let err = ResponseInterpreter::parse_body(r#"{"success": false, "error": " Text too long "}"#)
            .unwrap_err();
        assert_eq!(ResponseInterpreter::user_message(&err).as_str(), " Text too long ");
    }

    #[test]
    fn test_parse_application_failure_with_reason() {
        let err = ResponseInterpreter::parse_body(r#"{"success": false, "error": "Model not loaded"}"#)
            .unwrap_err();
        assert_eq!(err, ClassifyError::Application(Some("Model not loaded".to_string())));
        assert_eq!(ResponseInterpreter::user_message(&err).as_str(), "Model not loaded");
    }

    #[test]
    fn test_parse_application_failure_without_reason_uses_fallback() {
        let err = ResponseInterpreter::parse_body(r#"{"success": false}"#).unwrap_err();
        assert_eq!(err, ClassifyError::Application(None));
        let message = ResponseInterpreter::user_message(&err);
        assert_eq!(message.as_str(), GENERIC_ERROR_MESSAGE);
        assert!(!message.as_str().is_empty());
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let err = ResponseInterpreter::parse_body(r#"{"sentiment": "positive"}"#).unwrap_err();
        assert!(matches!(err, ClassifyError::Application(None)));
    }

    #[test]
    fn test_non_json_body_is_transport_failure() {
        let err = ResponseInterpreter::parse_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ClassifyError::Transport(_)));
        assert_eq!(
            ResponseInterpreter::user_message(&err).as_str(),
            CONNECTION_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_non_object_json_is_transport_failure() {
        let err = ResponseInterpreter::parse_body("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ClassifyError::Transport(_)));
    }

    #[test]
    fn test_transport_detail_is_not_surfaced() {
        let err = ClassifyError::Transport("connection refused (os error 111)".to_string());
        let message = ResponseInterpreter::user_message(&err);
        assert_eq!(message.as_str(), "Failed to connect to the server");
        assert!(!message.as_str().contains("111"));
    }
}
