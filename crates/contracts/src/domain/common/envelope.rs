use super::error::OrderDetailsError;
use serde::{Deserialize, Serialize};

/// `{success, error_msg, data}` wrapper shared by both upstream endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload. `fallback` is used when the upstream reports a
    /// failure without a message, or claims success without sending data.
    pub fn into_data(self, fallback: &str) -> Result<T, OrderDetailsError> {
        if !self.success {
            let message = self
                .error_msg
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            return Err(OrderDetailsError::Api { message });
        }
        self.data.ok_or_else(|| OrderDetailsError::api(fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        n: i32,
    }

    fn unwrap_generic<T: DeserializeOwned>(json: &str) -> Result<T, OrderDetailsError> {
        let env: ApiEnvelope<T> = serde_json::from_str(json).unwrap();
        env.into_data("fallback")
    }

    #[test]
    fn test_payload_without_default_through_generic_caller() {
        assert_eq!(
            unwrap_generic::<Payload>(r#"{"success": true, "data": {"n": 7}}"#),
            Ok(Payload { n: 7 })
        );
        assert_eq!(
            unwrap_generic::<Payload>(r#"{"success": true}"#),
            Err(OrderDetailsError::api("fallback"))
        );
    }

    #[test]
    fn test_success_unwraps_data() {
        let env: ApiEnvelope<Payload> =
            serde_json::from_str(r#"{"success": true, "error_msg": "", "data": {"n": 3}}"#)
                .unwrap();
        assert_eq!(env.into_data("fallback"), Ok(Payload { n: 3 }));
    }

    #[test]
    fn test_failure_uses_error_msg() {
        let env: ApiEnvelope<Payload> =
            serde_json::from_str(r#"{"success": false, "error_msg": "无权限"}"#).unwrap();
        assert_eq!(env.into_data("fallback"), Err(OrderDetailsError::api("无权限")));
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let env: ApiEnvelope<Payload> =
            serde_json::from_str(r#"{"success": false, "error_msg": ""}"#).unwrap();
        assert_eq!(env.into_data("fallback"), Err(OrderDetailsError::api("fallback")));

        let env: ApiEnvelope<Payload> = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(env.into_data("fallback"), Err(OrderDetailsError::api("fallback")));
    }

    #[test]
    fn test_success_without_data_is_api_error() {
        let env: ApiEnvelope<Payload> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(env.into_data("fallback"), Err(OrderDetailsError::api("fallback")));
    }
}
