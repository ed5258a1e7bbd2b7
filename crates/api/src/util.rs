use crate::ApiError;

/// Extract a mandatory numeric identifier from a query value.
///
/// Callers must always supply their identity explicitly; an absent, empty,
/// or non-numeric value is a request error, never substituted with a
/// default.
pub fn require_id(value: Option<&str>, message: &str) -> Result<i64, ApiError> {
    value
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| ApiError::bad_request(message))
}
