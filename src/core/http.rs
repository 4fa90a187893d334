use std::time::Duration;

use reqwest::{
    blocking::{
        Client,
        Response,
    },
    header::{
        ACCEPT,
        CACHE_CONTROL,
        USER_AGENT,
    },
};

use crate::core::PortalError;

pub fn http_client() -> Result<Client, PortalError> {
    Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .map_err(|e| PortalError::Custom(format!("HTTP client build failed: {e}")))
}

/// Single GET with caching disabled; the directory never retries a failed fetch.
pub fn fetch_json(client: &Client, url: &str) -> Result<serde_json::Value, PortalError> {
    let resp = client
        .get(url)
        .header(USER_AGENT, "mentor-portal/0.1 (+reqwest)")
        .header(ACCEPT, "application/json")
        .header(CACHE_CONTROL, "no-store")
        .send()?;

    ensure_success(&resp)?;
    Ok(resp.json::<serde_json::Value>()?)
}

fn ensure_success(resp: &Response) -> Result<(), PortalError> {
    if !resp.status().is_success() {
        return Err(PortalError::HttpStatus {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}
