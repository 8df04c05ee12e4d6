//! Response envelope decoding.
//!
//! Every CakeMail call answers with `{"status": ..., "data": ...}`. [`decode`]
//! turns a completed response into either the typed payload or a
//! [`CakeMailError`], and is the only place that knows the envelope rules.

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::models::ApiResponse;
use crate::{CakeMailError, CakeMailResult};

/// Decodes a raw CakeMail response.
///
/// # Arguments
///
/// * `body` - The response body, expected to be a JSON envelope.
/// * `status` - The HTTP status of the response.
/// * `uri` - The request URI, carried into any error.
/// * `array_property` - When set, the result is the array found at
///   `data.<array_property>` instead of `data` itself.
///
/// # Errors
///
/// - [`CakeMailError::HttpError`] for a non-2xx status (the body is not
///   inspected) or a body that is not an envelope.
/// - [`CakeMailError::ApiError`] when the envelope status is not `"success"`.
/// - [`CakeMailError::DeserializationError`] when the payload does not match
///   `T`, or the named property is missing, `null` or not an array.
///
/// A successful envelope without `data` is an acknowledgement and decodes as
/// JSON `true`, so `decode::<bool>` yields `true`.
///
/// # Examples
///
/// ```
/// use cakemail_client::{decode, CakeMailError};
/// use http::StatusCode;
/// use url::Url;
///
/// let uri = Url::parse("https://api.wbsrvc.com/Relay/GetLogs").unwrap();
/// let body = r#"{"status":"success","data":{"sent_logs":[]}}"#;
///
/// let logs: Vec<serde_json::Value> = decode(body, StatusCode::OK, &uri, Some("sent_logs"))?;
/// assert!(logs.is_empty());
/// # Ok::<(), CakeMailError>(())
/// ```
pub fn decode<T>(
    body: &str,
    status: StatusCode,
    uri: &Url,
    array_property: Option<&str>,
) -> CakeMailResult<T>
where
    T: DeserializeOwned,
{
    if !status.is_success() {
        let message = if body.trim().is_empty() {
            format!("API request failed with status code: {}", status)
        } else {
            format!("API request failed with status code: {}: {}", status, body.trim())
        };
        return Err(CakeMailError::HttpError {
            message,
            status,
            uri: uri.clone(),
            source: None,
        });
    }

    let envelope: ApiResponse =
        serde_json::from_str(body).map_err(|e| CakeMailError::HttpError {
            message: format!("Unable to parse response envelope: {}", e),
            status,
            uri: uri.clone(),
            source: Some(e),
        })?;

    if !envelope.is_success() {
        log::warn!("CakeMail call to {} reported status '{}'", uri, envelope.status);
        return Err(CakeMailError::ApiError {
            message: envelope.error_message(),
            status,
            uri: uri.clone(),
        });
    }

    let shape_error = |message: String| CakeMailError::DeserializationError {
        message,
        status,
        uri: uri.clone(),
        source: None,
    };

    let payload = match (envelope.data, array_property) {
        (None, None) => Value::Bool(true),
        (None, Some(name)) => {
            return Err(shape_error(format!(
                "Response did not include data; expected property '{}'",
                name
            )))
        }
        (Some(data), None) => data,
        (Some(Value::Object(mut map)), Some(name)) => match map.remove(name) {
            Some(array @ Value::Array(_)) => array,
            Some(Value::Null) | None => {
                return Err(shape_error(format!(
                    "Response data does not contain property '{}'",
                    name
                )))
            }
            Some(other) => {
                return Err(shape_error(format!(
                    "Property '{}' is not an array (found {})",
                    name,
                    kind_of(&other)
                )))
            }
        },
        (Some(other), Some(name)) => {
            return Err(shape_error(format!(
                "Response data is {}; expected an object with property '{}'",
                kind_of(&other),
                name
            )))
        }
    };

    serde_json::from_value(payload).map_err(|e| CakeMailError::DeserializationError {
        message: format!("Unable to deserialize response data: {}", e),
        status,
        uri: uri.clone(),
        source: Some(e),
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
