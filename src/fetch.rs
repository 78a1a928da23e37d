//! Host-side page acquisition over HTTP. Used only by the CLI binary; the
//! core library consumes snapshots from any source.

use std::time::Duration;

use once_cell::sync::Lazy;
use ureq::ResponseExt;

use crate::error::Result;
use crate::snapshot::PageSnapshot;

/// Default HTTP request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP agent for connection pooling
static HTTP_AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
        .build()
        .into()
});

/// Fetch a page and parse it into a snapshot. The snapshot's address is the
/// final URL after redirects, so ASIN-in-URL extraction sees the canonical
/// product path.
pub fn fetch_snapshot(url: &str) -> Result<PageSnapshot> {
    let response = HTTP_AGENT
        .get(url)
        .header(
            "User-Agent",
            "Mozilla/5.0 (compatible; dealrank/0.1; +https://github.com/dealrank/dealrank)",
        )
        .call()?;

    let final_url = response.get_uri().to_string();
    let html = response.into_body().read_to_string()?;

    Ok(PageSnapshot::new(final_url, &html))
}
