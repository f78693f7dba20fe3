use serde_json::Value;

/// Successful outcome of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// 2xx with a JSON body (object, array, or scalar).
    Json(Value),
    /// 2xx with an empty body, e.g. 204 on DELETE.
    NoContent,
}

impl ApiResponse {
    /// Borrows the decoded payload, if the response carried one.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::NoContent => None,
        }
    }

    /// Consumes the response, returning the decoded payload if any.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::NoContent => None,
        }
    }

    pub fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }
}
