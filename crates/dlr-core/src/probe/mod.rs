//! HTTP HEAD existence probes.
//!
//! Uses the curl crate (libcurl) to issue header-only requests: a 2xx
//! response means the candidate exists, anything else is a miss. Successful
//! probes surface `Content-Length` and `Last-Modified` when present.

mod classify;

pub use classify::classify_curl_error;

use std::time::Duration;

use crate::config::ProbeConfig;

/// Metadata captured from a successful HEAD probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeMeta {
    /// Total size in bytes, if `Content-Length` was present.
    pub content_length: Option<u64>,
    /// `Last-Modified` value if present.
    pub last_modified: Option<String>,
}

/// Why a probe did not select its candidate.
///
/// Routine, never fatal: the resolver logs the miss and tries the next
/// candidate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProbeMiss {
    /// Response arrived with a non-success status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Connect or read timed out.
    #[error("timed out")]
    Timeout,
    /// Network-level failure (connection refused, DNS, reset).
    #[error("connection: {0}")]
    Connection(String),
    /// Anything else, including URLs curl refuses outright.
    #[error("{0}")]
    Other(String),
}

/// Existence probe over a URL. Implemented by the curl prober and by
/// deterministic fakes in tests.
pub trait Prober {
    fn probe(&self, url: &str) -> Result<ProbeMeta, ProbeMiss>;
}

/// libcurl-backed HEAD prober.
///
/// Follows redirects. Runs on the current thread; call from `spawn_blocking`
/// when used from async code.
#[derive(Debug, Clone)]
pub struct CurlProber {
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlProber {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &ProbeConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.timeout_secs),
        )
    }
}

impl Default for CurlProber {
    fn default() -> Self {
        Self::from_config(&ProbeConfig::default())
    }
}

impl Prober for CurlProber {
    fn probe(&self, url: &str) -> Result<ProbeMeta, ProbeMiss> {
        let mut headers: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)
            .map_err(|e| ProbeMiss::Other(format!("invalid URL: {e}")))?;
        easy.nobody(true).map_err(|e| classify_curl_error(&e))?;
        easy.follow_location(true)
            .map_err(|e| classify_curl_error(&e))?;
        easy.connect_timeout(self.connect_timeout)
            .map_err(|e| classify_curl_error(&e))?;
        easy.timeout(self.timeout)
            .map_err(|e| classify_curl_error(&e))?;

        {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    if let Ok(s) = std::str::from_utf8(data) {
                        headers.push(s.trim_end().to_string());
                    }
                    true
                })
                .map_err(|e| classify_curl_error(&e))?;
            transfer.perform().map_err(|e| classify_curl_error(&e))?;
        }

        let code = easy
            .response_code()
            .map_err(|e| classify_curl_error(&e))?;
        if !(200..300).contains(&code) {
            return Err(ProbeMiss::Http(code));
        }

        Ok(parse_meta(&headers))
    }
}

/// Parse collected header lines into probe metadata. With redirects the last
/// response's headers win.
fn parse_meta(lines: &[String]) -> ProbeMeta {
    let mut meta = ProbeMeta::default();
    for line in lines {
        let Some((name, value)) = line.trim().split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        if name.eq_ignore_ascii_case("content-length") {
            if let Ok(n) = value.parse::<u64>() {
                meta.content_length = Some(n);
            }
        }
        if name.eq_ignore_ascii_case("last-modified") {
            meta.last_modified = Some(value.to_string());
        }
    }
    meta
}
