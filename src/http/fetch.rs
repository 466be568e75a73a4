use super::error_helpers::{check_response, deserialize_with_context};
use super::loud_wire;
use crate::errors::FetchError;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Label used when the caller does not supply one.
pub const DEFAULT_ERROR_LABEL: &str = "Something went wrong";

/// Performs a GET request and decodes the JSON body into `T`.
///
/// The request goes through three stages, any of which can fail:
/// 1. Transport: a failure to get any response is returned unchanged as
///    [`FetchError::Http`]. No body is read.
/// 2. Status: a non-2xx status becomes [`FetchError::Status`] carrying
///    `label` (or [`DEFAULT_ERROR_LABEL`]) and the numeric status code.
/// 3. Decode: a body that is not valid JSON for `T` becomes
///    [`FetchError::Decode`].
///
/// # Errors
///
/// See the stages above.
pub async fn get_json<T: DeserializeOwned>(
    http_client: &ReqwestClient,
    url: &str,
    label: Option<&str>,
) -> Result<T, FetchError> {
    let label = label.unwrap_or(DEFAULT_ERROR_LABEL);

    let request_id = loud_wire::next_request_id();
    loud_wire::log_request(request_id, "GET", url);
    debug!("GET {url}");

    let response = match http_client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            loud_wire::log_transport_error(request_id, &e);
            warn!("Request to {url} failed before a response arrived: {e}");
            return Err(FetchError::Http(e));
        }
    };

    let status = response.status().as_u16();
    loud_wire::log_response_status(request_id, status);

    let response = check_response(response, label).inspect_err(|_| {
        debug!("GET {url} returned non-success status {status}");
    })?;
    let body = response.text().await?;

    loud_wire::log_response_body(request_id, &body);
    debug!("GET {url} returned {status} with {} bytes", body.len());

    deserialize_with_context(&body, &format!("Response from {url}"))
}

/// Performs a GET request and returns the body as an untyped JSON value.
///
/// # Errors
///
/// Same as [`get_json`].
pub async fn get_json_value(
    http_client: &ReqwestClient,
    url: &str,
    label: Option<&str>,
) -> Result<Value, FetchError> {
    get_json(http_client, url, label).await
}
