//! Translation from the legacy Completions API to the Chat Completions API.
//!
//! The core of the proxy: rewrites a single-prompt completion request as a
//! one-turn chat request. All translation functions are pure (no I/O).

pub mod chat_types;
pub mod completion_types;
pub mod request;
