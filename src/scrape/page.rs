use crate::prelude::*;
use anyhow::anyhow;
use reqwest::Client;
use url::Url;

pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org";

/// Builds an absolute Wikipedia URL from a relative href like `/wiki/ISO_3166-2:US`.
pub fn wiki_url(href: &str) -> Result<String> {
    Ok(Url::parse(WIKIPEDIA_BASE_URL)?.join(href)?.to_string())
}

/// One blocking-style GET per page; a failed fetch is fatal to the run.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        let err = format!("Non-success response from {}: {}", url, response.status());
        tracing::error!(err);
        return Err(anyhow!(err));
    }

    Ok(response.text().await?)
}
