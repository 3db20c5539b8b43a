//! Release feed: latest-release metadata from the remote host's API.
//!
//! Recovers the product updater's check: fetch the latest release document,
//! compare versions, and pick the first archive/installer asset as the
//! direct download. Independent of the resolver's candidate lists.

mod version;

pub use version::is_newer;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::config::ReleaseConfig;

/// Latest-release document, trimmed to the fields the tool cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Outcome of an update check against a known current version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub current_version: String,
    pub latest_version: String,
    pub update_available: bool,
    /// First `.zip`/`.exe` asset, if the release carries one.
    pub download_url: Option<String>,
}

/// Fetches the latest release document.
///
/// Blocking; call from `spawn_blocking` in async code. The API requires a
/// User-Agent, so one is always sent.
pub fn fetch_latest(cfg: &ReleaseConfig) -> Result<Release> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&cfg.api_url).context("invalid release API URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;
    easy.useragent(concat!("dlr/", env!("CARGO_PKG_VERSION")))?;

    let mut list = curl::easy::List::new();
    list.append("Accept: application/vnd.github+json")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("release feed request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("release feed {} returned HTTP {}", cfg.api_url, code);
    }

    parse_release(&body)
}

/// Parse a release document from raw JSON bytes.
pub fn parse_release(bytes: &[u8]) -> Result<Release> {
    serde_json::from_slice(bytes).context("parse release JSON")
}

/// First asset that looks like a direct download (archive or installer).
pub fn direct_download_asset(release: &Release) -> Option<&ReleaseAsset> {
    release
        .assets
        .iter()
        .find(|a| a.name.ends_with(".zip") || a.name.ends_with(".exe"))
}

/// Compares a release against the configured current version.
pub fn check_update(release: &Release, current_version: &str) -> UpdateInfo {
    let latest_version = release.tag_name.trim_start_matches('v').to_string();
    let update_available = is_newer(current_version, &latest_version);
    UpdateInfo {
        current_version: current_version.to_string(),
        latest_version,
        update_available,
        download_url: direct_download_asset(release).map(|a| a.browser_download_url.clone()),
    }
}
