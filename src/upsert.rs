//! Endpoint-to-identifier conventions used by the `push` upsert fallback.

use serde_json::Value;

/// Returns the body field naming the resource ID for `endpoint`, when the
/// endpoint supports the POST-then-PUT fallback.
pub(crate) fn upsert_id_field(endpoint: &str) -> Option<&'static str> {
    match endpoint {
        "products" => Some("productID"),
        "categories" => Some("categoryID"),
        "orders" => Some("orderID"),
        "lists" => Some("listID"),
        "carts" => Some("cartID"),
        _ if is_cart_products_endpoint(endpoint) => Some("productID"),
        _ => None,
    }
}

/// Matches `carts/{cartID}/products`.
fn is_cart_products_endpoint(endpoint: &str) -> bool {
    endpoint
        .strip_prefix("carts/")
        .and_then(|rest| rest.strip_suffix("/products"))
        .is_some()
}

/// Resolves the resource ID for the PUT fallback by reading the conventional
/// id field out of the request body. Requires a non-empty object body and an
/// id that is a string or a number.
pub(crate) fn upsert_target_id(endpoint: &str, body: &Value) -> Option<String> {
    let field = upsert_id_field(endpoint)?;
    let map = body.as_object().filter(|map| !map.is_empty())?;
    match map.get(field)? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
