//! Smoke test against the real Omnisend API.
//!
//! Requires `OMNISEND_API_KEY` in the environment; silently skipped when the
//! variable is absent so that CI without credentials stays green.

use omnisend_http::OmnisendClient;

fn live_api_key() -> Option<String> {
    std::env::var("OMNISEND_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

#[tokio::test]
async fn live_contacts_listing() {
    let Some(api_key) = live_api_key() else {
        eprintln!("skipping live test: OMNISEND_API_KEY is not set");
        return;
    };

    let client = OmnisendClient::new(api_key).expect("client must construct");
    let response = client
        .get("contacts", [("limit", "1")])
        .await
        .expect("live contacts request must succeed");

    assert!(response.as_json().is_some());
}
