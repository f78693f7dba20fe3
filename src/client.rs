use std::fmt;
use std::time::Duration;

use reqwest::{header, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::{
    options::CONNECT_TIMEOUT_SECS, snippet, upsert, wire, ApiResponse, ClientOptions,
    OmnisendError, Query, Result,
};

/// Production API root. Overridable via [`OmnisendClient::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "https://api.omnisend.com/v3/";

const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status codes that earn one automatic retry, on the first attempt only.
const RETRYABLE_STATUSES: [StatusCode; 3] = [
    StatusCode::REQUEST_TIMEOUT,
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::SERVICE_UNAVAILABLE,
];

#[derive(Clone)]
/// HTTP client for the Omnisend REST API v3.
///
/// Every verb method resolves to `Result<ApiResponse, OmnisendError>`; the
/// client holds no per-call state and is safe to clone and share.
pub struct OmnisendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    options: ClientOptions,
}

impl fmt::Debug for OmnisendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmnisendClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl OmnisendClient {
    /// Creates a client with default options.
    ///
    /// Fails with [`OmnisendError::Config`] when the key lacks the `-`
    /// separator between account ID and secret, or when the HTTP transport
    /// cannot be initialized.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Creates a client with explicit options.
    ///
    /// Invalid option values (a zero timeout) are rejected rather than
    /// silently replaced with defaults.
    pub fn with_options(api_key: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let api_key = api_key.into();
        if !api_key.contains('-') {
            return Err(OmnisendError::Config(
                "invalid API key: expected an account-ID prefix followed by '-'".to_owned(),
            ));
        }
        options.validate()?;
        let http = build_http_client(&options)?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key,
            options,
        })
    }

    /// Points the client at a different API root, e.g. a staging host or an
    /// in-process test server. A trailing slash is added when missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Replaces the transport with one the embedding application built, e.g.
    /// to share a connection pool or set a proxy. The per-request timeout and
    /// headers still come from this client.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Issues a GET request.
    pub async fn get(&self, endpoint: &str, query: impl Into<Query>) -> Result<ApiResponse> {
        self.request(Method::GET, endpoint, None, query.into())
            .await
    }

    /// Issues a DELETE request with an empty body.
    pub async fn delete(&self, endpoint: &str, query: impl Into<Query>) -> Result<ApiResponse> {
        self.request(Method::DELETE, endpoint, None, query.into())
            .await
    }

    /// Issues a POST request — for creating items.
    pub async fn post<T>(
        &self,
        endpoint: &str,
        fields: &T,
        query: impl Into<Query>,
    ) -> Result<ApiResponse>
    where
        T: Serialize + ?Sized,
    {
        let body = encode_fields(fields)?;
        self.request(Method::POST, endpoint, body, query.into())
            .await
    }

    /// Issues a PUT request — for replacing an item by ID.
    pub async fn put<T>(
        &self,
        endpoint: &str,
        fields: &T,
        query: impl Into<Query>,
    ) -> Result<ApiResponse>
    where
        T: Serialize + ?Sized,
    {
        let body = encode_fields(fields)?;
        self.request(Method::PUT, endpoint, body, query.into())
            .await
    }

    /// Issues a PATCH request — for partial updates.
    pub async fn patch<T>(
        &self,
        endpoint: &str,
        fields: &T,
        query: impl Into<Query>,
    ) -> Result<ApiResponse>
    where
        T: Serialize + ?Sized,
    {
        let body = encode_fields(fields)?;
        self.request(Method::PATCH, endpoint, body, query.into())
            .await
    }

    /// Create-or-update convenience, for callers that do not know whether the
    /// item already exists.
    ///
    /// Tries POST first. When the POST fails without field-validation errors
    /// and the body carries the identifier the endpoint's convention names
    /// (`products`→`productID`, `orders`→`orderID`, ...), the same payload is
    /// retried once as `PUT endpoint/<id>`. Any other failure is returned
    /// unchanged.
    pub async fn push<T>(
        &self,
        endpoint: &str,
        fields: &T,
        query: impl Into<Query>,
    ) -> Result<ApiResponse>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(fields).map_err(encode_error)?;
        let query = query.into();

        let post = self
            .request(
                Method::POST,
                endpoint,
                body_from_value(value.clone()),
                query.clone(),
            )
            .await;
        let err = match post {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };

        if !err.fields().is_empty() {
            return Err(err);
        }
        let Some(id) = upsert::upsert_target_id(endpoint, &value) else {
            return Err(err);
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint, id = %id, "push falling back to PUT");

        self.request(
            Method::PUT,
            &format!("{endpoint}/{id}"),
            body_from_value(value),
            query,
        )
        .await
    }

    /// Returns the storefront tracking snippet for this client's account.
    ///
    /// A static HTML/script template embedding the account-ID prefix of the
    /// API key; no request is made.
    pub fn snippet(&self) -> String {
        snippet::tracking_snippet(snippet::account_id(&self.api_key))
    }

    /// Performs one logical request: attempt 1 plus at most one retry for the
    /// transient statuses in [`RETRYABLE_STATUSES`]. Transport failures are
    /// never retried.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        query: Query,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut first_attempt = true;

        loop {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(header::CONTENT_TYPE, "application/json")
                .header(wire::API_KEY_HEADER, &self.api_key)
                .header(wire::SDK_VERSION_HEADER, SDK_VERSION)
                .timeout(Duration::from_secs(self.options.timeout_secs));
            if !query.is_empty() {
                request = request.query(query.pairs());
            }
            if let Some(body) = &body {
                request = request.json(body);
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(%method, %url, "sending request");

            let response = request.send().await.map_err(OmnisendError::Transport)?;
            let status = response.status();
            let text = response.text().await.map_err(OmnisendError::Transport)?;

            if status.is_success() {
                if text.is_empty() {
                    return Ok(ApiResponse::NoContent);
                }
                return serde_json::from_str(&text)
                    .map(ApiResponse::Json)
                    .map_err(|err| {
                        OmnisendError::Decode(format!(
                            "invalid response JSON: {err}; body: {text}"
                        ))
                    });
            }

            if first_attempt && RETRYABLE_STATUSES.contains(&status) {
                #[cfg(feature = "tracing")]
                tracing::debug!(status = status.as_u16(), "retrying transient status");
                first_attempt = false;
                continue;
            }

            return Err(classify_failure(status, &text));
        }
    }
}

fn build_http_client(options: &ClientOptions) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .danger_accept_invalid_certs(!options.verify_tls)
        .build()
        .map_err(|err| {
            OmnisendError::Config(format!("could not initialize HTTP transport: {err}"))
        })
}

/// Maps a non-success, non-retried status to its error variant. The 429 arm
/// is only reachable after the automatic retry already happened.
fn classify_failure(status: StatusCode, body: &str) -> OmnisendError {
    match status {
        StatusCode::FORBIDDEN => OmnisendError::Forbidden,
        StatusCode::TOO_MANY_REQUESTS => OmnisendError::RateLimited,
        _ => {
            let parsed = wire::ErrorBody::from_response_text(body);
            OmnisendError::Remote {
                status: status.as_u16(),
                message: parsed
                    .error
                    .unwrap_or_else(|| "Unknown error occurred.".to_owned()),
                fields: parsed.fields.unwrap_or_default(),
            }
        }
    }
}

fn encode_fields<T>(fields: &T) -> Result<Option<Value>>
where
    T: Serialize + ?Sized,
{
    Ok(body_from_value(
        serde_json::to_value(fields).map_err(encode_error)?,
    ))
}

/// `null` stands for an absent body, so `&()` sends no payload at all.
fn body_from_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        value => Some(value),
    }
}

fn encode_error(err: serde_json::Error) -> OmnisendError {
    OmnisendError::Encode(format!("request body could not be serialized: {err}"))
}
