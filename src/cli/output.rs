//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;
use serde_json::json;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}

/// JSON form of an error, tagged with its stable kind.
pub fn map_error_json(e: &ApiError) -> String {
    let out = json!({ "error": e.kind(), "message": e.to_string() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
