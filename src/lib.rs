//! `omnisend-http` is an async HTTP client for the Omnisend marketing API v3.
//!
//! The crate wraps the REST endpoints with generic verb methods:
//! - [`OmnisendClient::get`] / [`OmnisendClient::post`] / [`OmnisendClient::put`] /
//!   [`OmnisendClient::patch`] / [`OmnisendClient::delete`]
//! - [`OmnisendClient::push`] — create-or-update convenience: POST first,
//!   PUT by resource ID on a clean (non-validation) failure

mod client;
mod error;
mod options;
mod query;
mod response;
mod snippet;
mod upsert;
mod wire;

pub use client::OmnisendClient;
pub use error::OmnisendError;
pub use options::ClientOptions;
pub use query::Query;
pub use response::ApiResponse;

pub type Result<T> = std::result::Result<T, OmnisendError>;
