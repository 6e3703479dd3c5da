//! HTTP client abstraction for native and browser builds
//! Uses reqwest with the `native` feature, gloo-net with `web`

use serde::de::DeserializeOwned;

#[cfg(all(feature = "native", not(feature = "web")))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Option<T> {
    let response = reqwest::Client::new()
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|err| log::error!("Request to {} failed: {}", url, err))
        .ok()?;

    if !response.status().is_success() {
        log::error!("HTTP error from {}: {}", url, response.status());
        return None;
    }

    response
        .json()
        .await
        .map_err(|err| log::error!("Unexpected response body from {}: {}", url, err))
        .ok()
}

#[cfg(feature = "web")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Option<T> {
    let response = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|err| log::error!("Request to {} failed: {}", url, err))
        .ok()?;

    if !response.ok() {
        log::error!("HTTP error from {}: {}", url, response.status());
        return None;
    }

    response
        .json()
        .await
        .map_err(|err| log::error!("Unexpected response body from {}: {}", url, err))
        .ok()
}

// Fallback for when neither feature is enabled (cargo check, unit tests)
#[cfg(not(any(feature = "native", feature = "web")))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Option<T> {
    log::debug!("No HTTP backend compiled in, skipping {}", url);
    None
}
