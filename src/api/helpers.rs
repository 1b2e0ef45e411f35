//! API Gateway proxy response builders.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::errors::EisakuError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Returns a response with the given status code and a JSON-serialized body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = match serde_json::to_string(body) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            return err_response(500, "Internal server error");
        }
    };
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": JSON_CONTENT_TYPE },
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": JSON_CONTENT_TYPE },
        "body": json!({ "error": message }).to_string()
    })
}

/// Maps a crate error to its status and caller-facing message.
#[must_use]
pub fn error_to_response(err: &EisakuError) -> Value {
    err_response(err.status_code(), err.user_message())
}
