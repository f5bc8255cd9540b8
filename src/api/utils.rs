use anyhow::Result;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use super::error::{FetchError, FetchErrorKind};

pub async fn make_request<T>(request: RequestBuilder, operation: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let res = request.send().await.map_err(|e| {
        tracing::warn!(operation, error = %e, "request failed");
        FetchError::new(operation, FetchErrorKind::Transport(e.to_string()))
    })?;

    let status = res.status();
    if !status.is_success() {
        tracing::warn!(operation, %status, "request rejected");
        return Err(FetchError::new(operation, FetchErrorKind::Status(status)).into());
    }

    let text = res
        .text()
        .await
        .map_err(|e| FetchError::new(operation, FetchErrorKind::Transport(e.to_string())))?;

    parse_response(&text, operation)
}

pub fn parse_response<T>(text: &str, operation: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(|e| {
        tracing::warn!(operation, error = %e, "undecodable response body");
        FetchError::new(operation, FetchErrorKind::Decode(e.to_string())).into()
    })
}
