//! Request parsing: query strings and delete bodies.

use serde_json::Value;

use crate::domain::shared::OrderId;
use crate::error::GatewayError;

/// Find the first non-blank value of a query parameter.
///
/// The fragment is ignored. Keys and values are form-urlencoded decoded;
/// blank values (`?id=`) are treated as absent.
#[must_use]
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let (_, query) = without_fragment.split_once('?')?;

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.into_owned())
}

/// Parse the `id` query parameter.
///
/// Only non-empty runs of ASCII digits are accepted. `Ok(None)` means the
/// digits can never name a stored order (zero, or too large for an id).
///
/// # Errors
///
/// Returns [`GatewayError::InvalidOrderId`] for anything that is not digits.
pub fn parse_id_param(raw: &str) -> Result<Option<OrderId>, GatewayError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GatewayError::InvalidOrderId);
    }
    Ok(raw.parse::<u64>().ok().and_then(OrderId::new))
}

/// Extract the order id from a delete body.
///
/// `Ok(None)` means the id is an integer that can never name a stored order
/// (zero or negative).
///
/// # Errors
///
/// - [`GatewayError::MissingOrderId`] when the body is absent, not an object,
///   empty, or its `id` is missing or falsy (`null`, `false`, `0`, `""`,
///   `[]`, `{}`).
/// - [`GatewayError::InvalidOrderId`] when `id` is present but not an integer.
pub fn parse_delete_body(payload: Option<&Value>) -> Result<Option<OrderId>, GatewayError> {
    let id = payload
        .and_then(Value::as_object)
        .and_then(|body| body.get("id"))
        .filter(|id| !is_falsy(id))
        .ok_or(GatewayError::MissingOrderId)?;

    match id {
        Value::Number(n) if n.is_u64() => Ok(n.as_u64().and_then(OrderId::new)),
        Value::Number(n) if n.is_i64() => Ok(n.as_i64().and_then(OrderId::from_i64)),
        _ => Err(GatewayError::InvalidOrderId),
    }
}

/// JSON values that count as "no value".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
