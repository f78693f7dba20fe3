use serde::Deserialize;

/// Header carrying the API key on every request.
pub(crate) const API_KEY_HEADER: &str = "X-API-KEY";
/// Header identifying this client and its version.
pub(crate) const SDK_VERSION_HEADER: &str = "X-SDK-Version";

/// Error body the API may attach to non-success responses. Every field is
/// optional, and the body is often not JSON at all.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

impl ErrorBody {
    /// Best-effort parse; an undecodable body yields the empty shape.
    pub fn from_response_text(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorBody;

    #[test]
    fn parses_error_and_fields() {
        let body = ErrorBody::from_response_text(
            r#"{"error": "email is invalid", "fields": ["email"]}"#,
        );
        assert_eq!(body.error.as_deref(), Some("email is invalid"));
        assert_eq!(body.fields.unwrap(), ["email".to_owned()]);
    }

    #[test]
    fn non_json_body_yields_empty_shape() {
        let body = ErrorBody::from_response_text("<html>Bad Gateway</html>");
        assert!(body.error.is_none());
        assert!(body.fields.is_none());
    }
}
