use crate::config::ProxyConfig;
use crate::error::{ProxyError, Result};
use crate::translate::chat_types::ChatCompletionRequest;

use bytes::Bytes;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Forward a translated chat request to the configured upstream and hand the
/// raw response back for relaying.
///
/// Exactly one outbound call is made. The response body is returned as-is;
/// callers must not assume it parses as anything in particular.
pub async fn forward(
    chat_req: &ChatCompletionRequest,
    authorization: Option<&HeaderValue>,
    config: &ProxyConfig,
    client: &reqwest::Client,
) -> Result<(u16, Bytes)> {
    let body = serde_json::to_vec(chat_req)
        .map_err(|e| ProxyError::encode(format!("Failed to serialize chat request: {e}")))?;

    let url_str = config.chat_completions_url();
    let url: reqwest::Url = url_str.parse().map_err(|e| {
        ProxyError::upstream_request(format!("Invalid upstream URL {url_str}: {e}"))
    })?;

    tracing::debug!(url = %url, body_len = body.len(), "POST upstream");

    let mut req_builder = client.post(url).header(CONTENT_TYPE, "application/json");
    if let Some(auth) = authorization {
        req_builder = req_builder.header(AUTHORIZATION, auth.clone());
    }

    let response = req_builder
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::upstream_connect(format!("Upstream request failed: {e}")))?;

    let status = response.status().as_u16();
    let resp_body = response
        .bytes()
        .await
        .map_err(|e| ProxyError::upstream_read(format!("Failed to read upstream response: {e}")))?;

    tracing::debug!(status, resp_len = resp_body.len(), "Upstream response");

    Ok((status, resp_body))
}
