use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::EisakuError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path from an HTTP API (`rawPath`) or REST API (`path`) event.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Upper-cased request method from either API Gateway payload version.
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

/// Request body, base64-decoded when API Gateway flagged it as encoded.
pub fn request_body(payload: &Value) -> Result<Option<String>, EisakuError> {
    let Some(body) = v_str(payload, &["body"]) else {
        return Ok(None);
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return Ok(Some(body.to_string()));
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| EisakuError::ParseError(format!("Failed to decode base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| EisakuError::ParseError(format!("Body is not UTF-8: {e}")))
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}
