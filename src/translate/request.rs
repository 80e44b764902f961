//! Translate legacy completion requests into Chat Completions requests.
//!
//! A single-prompt request becomes a one-turn conversation: the prompt is
//! wrapped as the sole `user` message and every tuning field rides along
//! unchanged.

use super::chat_types::{ChatCompletionRequest, ChatMessage};
use super::completion_types::CompletionRequest;

/// Translate a legacy completion request into a chat completion request.
/// Pure function: takes the decoded request, returns the translated request.
#[must_use]
pub fn completion_to_chat(req: &CompletionRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: req.model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: req.prompt.clone(),
        }],
        max_tokens: req.max_tokens.clone(),
        temperature: req.temperature.clone(),
        top_p: req.top_p.clone(),
        n: req.n.clone(),
        stream: req.stream.clone(),
        stop: req.stop.clone(),
        presence_penalty: req.presence_penalty.clone(),
        frequency_penalty: req.frequency_penalty.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(body: &str) -> serde_json::Result<CompletionRequest> {
        serde_json::from_str(body)
    }

    #[test]
    fn test_prompt_becomes_single_user_message() {
        let req = decode(r#"{"model":"text-davinci-003","prompt":"Hello"}"#).unwrap();

        let chat = completion_to_chat(&req);

        assert_eq!(
            chat.messages,
            vec![ChatMessage {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }]
        );
        assert_eq!(chat.model, Some(json!("text-davinci-003")));
    }

    #[test]
    fn test_pass_through_fields_preserved() {
        let req = decode(
            r#"{
                "model": "text-davinci-003",
                "prompt": "Hello",
                "max_tokens": 5,
                "temperature": 0.25,
                "top_p": 1,
                "n": 2,
                "stream": false,
                "stop": ["\n", "END"],
                "presence_penalty": -0.5,
                "frequency_penalty": 0.5
            }"#,
        )
        .unwrap();

        let value = serde_json::to_value(completion_to_chat(&req)).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "text-davinci-003",
                "messages": [{"role": "user", "content": "Hello"}],
                "max_tokens": 5,
                "temperature": 0.25,
                "top_p": 1,
                "n": 2,
                "stream": false,
                "stop": ["\n", "END"],
                "presence_penalty": -0.5,
                "frequency_penalty": 0.5
            })
        );
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let req = decode(r#"{"prompt":"Hi"}"#).unwrap();

        let value = serde_json::to_value(completion_to_chat(&req)).unwrap();

        assert_eq!(value, json!({"messages": [{"role": "user", "content": "Hi"}]}));
    }

    #[test]
    fn test_explicit_null_treated_as_absent() {
        let req = decode(r#"{"prompt":"Hi","model":null,"temperature":null}"#).unwrap();

        let value = serde_json::to_value(completion_to_chat(&req)).unwrap();

        assert_eq!(value, json!({"messages": [{"role": "user", "content": "Hi"}]}));
    }

    #[test]
    fn test_unknown_fields_are_not_forwarded() {
        let req = decode(r#"{"prompt":"Hi","suffix":" end","logprobs":3}"#).unwrap();

        let value = serde_json::to_value(completion_to_chat(&req)).unwrap();

        assert_eq!(value, json!({"messages": [{"role": "user", "content": "Hi"}]}));
    }

    #[test]
    fn test_missing_prompt_fails_to_decode() {
        assert!(decode(r#"{"model":"text-davinci-003"}"#).is_err());
    }

    #[test]
    fn test_non_string_prompt_fails_to_decode() {
        assert!(decode(r#"{"prompt":42}"#).is_err());
        assert!(decode(r#"{"prompt":["Hello"]}"#).is_err());
        assert!(decode(r#"{"prompt":null}"#).is_err());
    }

    #[test]
    fn test_translation_is_idempotent() {
        let req = decode(r#"{"model":"m","prompt":"p","max_tokens":7,"stop":"\n"}"#).unwrap();

        let first = serde_json::to_value(completion_to_chat(&req)).unwrap();
        let second = serde_json::to_value(completion_to_chat(&req)).unwrap();

        assert_eq!(first, second);
    }
}
