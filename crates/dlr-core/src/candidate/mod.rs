//! Candidate modeling: source tiers, URL joining, and name derivation.

mod name;

pub use name::{display_name, safe_save_name};

use anyhow::{Context, Result};
use url::Url;

/// Source tier of a resolution, in strict priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Site-relative downloads folder.
    Local,
    /// Release host's direct-download endpoint.
    Remote,
    /// Releases index page; nothing was directly downloadable.
    Fallback,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tier::Local => "local",
            Tier::Remote => "remote",
            Tier::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// Joins a candidate path or filename to a base URL.
///
/// The base is treated as a directory: a missing trailing slash is added so
/// the join appends to the path instead of replacing its final segment.
pub fn join_url(base: &str, candidate: &str) -> Result<String> {
    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    let joined = Url::parse(&base)
        .with_context(|| format!("invalid base URL: {base}"))?
        .join(candidate.trim_start_matches('/'))
        .with_context(|| format!("cannot join candidate {candidate:?} to {base}"))?;
    Ok(joined.to_string())
}
