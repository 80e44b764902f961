//! Type definitions for the legacy Completions API request
//! (single string prompt, no conversational turns).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A legacy completion request as received on `/v1/completions`.
///
/// `prompt` is the only field the proxy interprets; decoding fails if it is
/// missing or not a string. Every other field is held as raw JSON and copied
/// to the upstream untouched, so numeric precision and types survive the
/// round trip. Fields not listed here are dropped, never forwarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<Value>,
}
