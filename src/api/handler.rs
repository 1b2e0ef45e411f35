//! API Lambda handler - thin router over the two practice endpoints.
//!
//! - `GET /sentences` (also `/api/news`): one random Japanese sentence
//! - `POST /hints` (also `/api/hint`): vocabulary and grammar hint for a sentence

use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client;
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::clients::shared_client;
use crate::core::config::AppConfig;
use crate::core::models::{HintRequest, HintResponse};
use crate::errors::EisakuError;
use crate::hints::{HintGenerator, require_sentence};
use crate::sentences::SentenceSupplier;

pub use self::function_handler as handler;

const SENTENCE_PATHS: &[&str] = &["/sentences", "/api/news"];
const HINT_PATHS: &[&str] = &["/hints", "/api/hint"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Sentence,
    Hint,
}

/// Lambda handler for the API entrypoint.
///
/// Every outcome, including failures, is returned as a proxy response; the
/// invocation itself only errors if the runtime cannot deliver the event.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let request_id = Uuid::new_v4();
    let span = info_span!("request", request_id = %request_id);

    let response = async move {
        let config = AppConfig::from_env();
        let http = shared_client();
        dispatch(&config, &http, &event.payload).await
    }
    .instrument(span)
    .await;

    Ok(response)
}

/// Route a proxy event to its endpoint and build the response.
pub async fn dispatch(config: &AppConfig, http: &Client, payload: &Value) -> Value {
    let route = match resolve_route(payload) {
        Ok(route) => route,
        Err(response) => return response,
    };

    match route {
        Route::Sentence => {
            let supplier = SentenceSupplier::from_config(config, http);
            handle_sentence(&supplier).await
        }
        Route::Hint => {
            handle_hint(payload, || HintGenerator::from_config(config, http)).await
        }
    }
}

/// Match path and method, or produce the 404/405 response.
pub fn resolve_route(payload: &Value) -> Result<Route, Value> {
    let path = parsing::request_path(payload).unwrap_or("/");
    let method = parsing::request_method(payload).unwrap_or_default();
    let trace_id = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
        .unwrap_or("");
    info!(raw_path = %path, method = %method, xray_trace_id = %trace_id, "API request");

    let (route, expected) = if matches_any(path, SENTENCE_PATHS) {
        (Route::Sentence, "GET")
    } else if matches_any(path, HINT_PATHS) {
        (Route::Hint, "POST")
    } else {
        return Err(helpers::err_response(404, "Not found"));
    };

    if method != expected {
        return Err(helpers::err_response(405, "Method not allowed"));
    }
    Ok(route)
}

// Stages prefix the path (`/prod/sentences`), so match on the suffix.
fn matches_any(path: &str, candidates: &[&str]) -> bool {
    let path = path.trim_end_matches('/');
    candidates.iter().any(|c| path.ends_with(c))
}

pub async fn handle_sentence(supplier: &SentenceSupplier) -> Value {
    match supplier.random_sentence().await {
        Ok(sentence) => {
            info!(source = %sentence.source, category = %sentence.category, "Selected sentence");
            helpers::json_response(200, &sentence)
        }
        Err(e) => {
            error!("Error fetching sentences: {}", e);
            helpers::error_to_response(&e)
        }
    }
}

/// Validate the hint request, then build a generator and run it.
///
/// The generator is built lazily so a missing sentence is reported before a
/// missing API key.
pub async fn handle_hint<F>(payload: &Value, make_generator: F) -> Value
where
    F: FnOnce() -> Result<HintGenerator, EisakuError>,
{
    match generate_hint(payload, make_generator).await {
        Ok(hint) => helpers::json_response(200, &HintResponse { hint }),
        Err(e) => {
            error!("Hint API error: {}", e);
            helpers::error_to_response(&e)
        }
    }
}

async fn generate_hint<F>(payload: &Value, make_generator: F) -> Result<String, EisakuError>
where
    F: FnOnce() -> Result<HintGenerator, EisakuError>,
{
    let request = parse_hint_request(payload)?;
    let sentence = require_sentence(request.sentence.as_deref())?;
    let generator = make_generator()?;
    generator.generate(sentence).await
}

fn parse_hint_request(payload: &Value) -> Result<HintRequest, EisakuError> {
    match parsing::request_body(payload)? {
        Some(body) if !body.trim().is_empty() => Ok(serde_json::from_str(&body)?),
        _ => Ok(HintRequest { sentence: None }),
    }
}
