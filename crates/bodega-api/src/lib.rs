// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use bodega_app::Product;
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Blocking client for the two store endpoints. Cheap to clone; fetch
/// workers take their own copy.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("api.base_url must not be empty");
        }
        Url::parse(&base_url).with_context(|| format!("invalid api.base_url {base_url:?}"))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `GET {base}/products` — the full catalog, in server response order.
    pub fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body))
                .with_context(|| format!("fetch {url}"));
        }

        response.json().with_context(|| format!("decode product list from {url}"))
    }

    /// `GET {base}/products/categories` — raw category labels, unnormalized.
    pub fn fetch_categories(&self) -> Result<Vec<String>> {
        let url = format!("{}/products/categories", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body))
                .with_context(|| format!("fetch {url}"));
        }

        response.json().with_context(|| format!("decode category list from {url}"))
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check the network or point --base-url at a reachable store ({} )",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = parsed.get("message").and_then(serde_json::Value::as_str)
        && !message.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), message);
    }

    if body.len() < 100 && !body.contains('{') {
        let trimmed = body.trim();
        if !trimmed.is_empty() {
            return anyhow!("server error ({}): {}", status.as_u16(), trimmed);
        }
    }

    anyhow!("server returned {}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::{Client, clean_error_response};
    use reqwest::StatusCode;
    use std::time::Duration;

    #[test]
    fn rejects_empty_base_url() {
        let error = Client::new("", Duration::from_secs(1)).expect_err("empty url should fail");
        assert!(error.to_string().contains("must not be empty"));
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let error = Client::new("not a url", Duration::from_secs(1))
            .expect_err("garbage url should fail");
        assert!(error.to_string().contains("invalid api.base_url"));
    }

    #[test]
    fn trims_trailing_slashes_from_base_url() {
        let client =
            Client::new("https://fakestoreapi.com///", Duration::from_secs(1)).expect("client");
        assert_eq!(client.base_url(), "https://fakestoreapi.com");
    }

    #[test]
    fn clean_error_prefers_json_message_field() {
        let error = clean_error_response(
            StatusCode::NOT_FOUND,
            r#"{"message":"catalog unavailable"}"#,
        );
        assert_eq!(error.to_string(), "server error (404): catalog unavailable");
    }

    #[test]
    fn clean_error_passes_short_plain_bodies_through() {
        let error = clean_error_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(error.to_string(), "server error (502): upstream down");
    }

    #[test]
    fn clean_error_falls_back_to_bare_status() {
        let error = clean_error_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(error.to_string(), "server returned 500");
    }
}
