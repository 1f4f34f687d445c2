// ABOUTME: Page download for the harvesters: one GET per source URL.
// ABOUTME: Rejects non-HTTP URLs, non-200 answers and oversized bodies; decodes Cyrillic charsets.

use std::collections::HashMap;

use bytes::Bytes;
use encoding_rs::Encoding;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use url::Url;

use crate::error::HarvestError;

/// Largest body accepted from a source, 10 MiB.
pub const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

const OP: &str = "Fetch";

/// A downloaded source page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Address after redirects.
    pub url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Page {
    /// Body decoded to text.
    ///
    /// A charset named in the content type wins; otherwise the encoding is
    /// guessed with a bias toward Russian pages (windows-1251, KOI8-R).
    pub fn html(&self) -> String {
        let encoding = self
            .content_type
            .as_deref()
            .and_then(charset_encoding)
            .unwrap_or_else(|| sniff_encoding(&self.body));
        encoding.decode(&self.body).0.into_owned()
    }
}

fn charset_encoding(content_type: &str) -> Option<&'static Encoding> {
    content_type.split(';').find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        Encoding::for_label(value.trim().trim_matches(|c| c == '"' || c == '\'').as_bytes())
    })
}

fn sniff_encoding(body: &[u8]) -> &'static Encoding {
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(Some(&b"ru"[..]), true)
}

fn http_url(raw: &str) -> Result<Url, HarvestError> {
    if raw.trim().is_empty() {
        return Err(HarvestError::invalid_url(raw, OP, None));
    }
    let url = Url::parse(raw).map_err(|e| HarvestError::invalid_url(raw, OP, Some(e.into())))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HarvestError::invalid_url(
            raw,
            OP,
            Some(anyhow::anyhow!("unsupported scheme {:?}", other)),
        )),
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> HarvestError {
    if e.is_timeout() {
        HarvestError::timeout(url, OP, Some(e.into()))
    } else {
        HarvestError::fetch(url, OP, Some(e.into()))
    }
}

fn too_large(url: &str, size: u64) -> HarvestError {
    HarvestError::fetch(
        url,
        OP,
        Some(anyhow::anyhow!(
            "body of {} bytes exceeds the {} byte limit",
            size,
            MAX_BODY_BYTES
        )),
    )
}

fn header_str(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers.get(name)?.to_str().ok().map(str::to_string)
}

/// Downloads `url` with `client`, adding `headers` to the request.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
) -> Result<Page, HarvestError> {
    let target = http_url(url)?;

    let request = headers
        .iter()
        .fold(client.get(target), |req, (k, v)| req.header(k, v));
    let response = request.send().await.map_err(|e| transport_error(url, e))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(HarvestError::fetch(
            url,
            OP,
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }
    if let Some(len) = response.content_length().filter(|&n| n > MAX_BODY_BYTES) {
        return Err(too_large(url, len));
    }

    let final_url = response.url().to_string();
    let content_type = header_str(response.headers(), CONTENT_TYPE);
    let body = response.bytes().await.map_err(|e| transport_error(url, e))?;
    if body.len() as u64 > MAX_BODY_BYTES {
        return Err(too_large(url, body.len() as u64));
    }

    Ok(Page {
        url: final_url,
        content_type,
        body,
    })
}
