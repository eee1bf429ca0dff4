use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Escapes everything except unreserved characters and `/`, the set URL
/// paths and share links expect.
pub const URL_ENCODE: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Timeout,
    Transport(String),
    HttpStatus { status: u16 },
    Decode(String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "request timed out"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::HttpStatus { status } => write!(f, "request failed with status {status}"),
            Self::Decode(msg) => write!(f, "failed to decode response: {msg}"),
        }
    }
}

impl Error for FetchError {}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Sends a request with a single blind retry: immediately after a timeout,
/// after a short pause for any other failure (non-2xx statuses included).
pub async fn send_with_retry(request: reqwest::RequestBuilder) -> FetchResult<reqwest::Response> {
    let second_attempt = request.try_clone();

    match send_checked(request).await {
        Ok(response) => Ok(response),
        Err(err) => {
            let Some(retry) = second_attempt else {
                return Err(err);
            };
            tracing::info!("Retrying after {err}");
            if err != FetchError::Timeout {
                tokio::time::sleep(RETRY_DELAY).await;
            }
            send_checked(retry).await
        }
    }
}

/// Sends a request once, mapping non-2xx statuses to errors.
pub async fn send_once(request: reqwest::RequestBuilder) -> FetchResult<reqwest::Response> {
    send_checked(request).await
}

pub async fn json_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> FetchResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}

async fn send_checked(request: reqwest::RequestBuilder) -> FetchResult<reqwest::Response> {
    let response = request.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err.to_string())
    }
}
