//! The response envelope every backend endpoint wraps its payload in.

use serde::Deserialize;

use crate::error::ClientError;

/// Fallback message when the backend supplies none.
pub(crate) const DEFAULT_ERROR_MESSAGE: &str = "request failed";

/// Outcome discriminant carried by every response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum Outcome {
    Success,
    OperationFailed,
}

/// Wire-level response wrapper: `{ output, code, message, data, error_message }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub output: Outcome,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope: `Success` yields the payload, anything else an
    /// [`ClientError::Api`] carrying the resolved message. Envelope metadata
    /// (code, message) is discarded on success.
    pub fn into_result(self) -> Result<Option<T>, ClientError> {
        match self.output {
            Outcome::Success => Ok(self.data),
            Outcome::OperationFailed => Err(ClientError::Api {
                message: resolve_message(self.error_message, self.message),
            }),
        }
    }
}

/// Message fallback chain: `error_message`, then `message`, then a default.
pub(crate) fn resolve_message(error_message: Option<String>, message: Option<String>) -> String {
    error_message
        .filter(|m| !m.is_empty())
        .or_else(|| message.filter(|m| !m.is_empty()))
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Envelope<serde_json::Value> {
        serde_json::from_str(json).expect("envelope should parse")
    }

    #[test]
    fn success_yields_exactly_data() {
        let env = parse(r#"{"output":"Success","code":0,"message":"ok","data":{"k":1}}"#);
        let data = env.into_result().unwrap().unwrap();
        assert_eq!(data, serde_json::json!({"k": 1}));
    }

    #[test]
    fn success_without_data_yields_none() {
        let env = parse(r#"{"output":"Success","code":0,"message":"ok"}"#);
        assert!(env.into_result().unwrap().is_none());
    }

    #[test]
    fn failure_prefers_error_message() {
        let env = parse(
            r#"{"output":"OperationFailed","code":1,"message":"generic","error_message":"specific"}"#,
        );
        match env.into_result() {
            Err(ClientError::Api { message }) => assert_eq!(message, "specific"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn failure_falls_back_to_message() {
        let env = parse(r#"{"output":"OperationFailed","code":1,"message":"generic"}"#);
        match env.into_result() {
            Err(ClientError::Api { message }) => assert_eq!(message, "generic"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn failure_falls_back_to_default() {
        let env = parse(r#"{"output":"OperationFailed","code":1}"#);
        match env.into_result() {
            Err(ClientError::Api { message }) => assert_eq!(message, DEFAULT_ERROR_MESSAGE),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn empty_strings_do_not_shadow_fallbacks() {
        assert_eq!(
            resolve_message(Some(String::new()), Some("real".to_string())),
            "real"
        );
        assert_eq!(
            resolve_message(Some(String::new()), Some(String::new())),
            DEFAULT_ERROR_MESSAGE
        );
    }
}
