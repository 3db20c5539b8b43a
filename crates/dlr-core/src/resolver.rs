//! Tiered candidate resolution: ordered probing with fallback.
//!
//! The decision logic of the system: walk the local tier in order, then the
//! remote tier, first probe hit wins; both exhausted means the fallback URL.
//! A pass never fails; the worst outcome is the fallback tier.

use crate::candidate::{self, Tier};
use crate::config::DlrConfig;
use crate::probe::{ProbeMeta, Prober};

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Tier the winning URL came from.
    pub tier: Tier,
    /// URL to apply to link targets: site-relative for the local tier,
    /// absolute for remote and fallback.
    pub url: String,
    /// Name derived from the winning candidate's final path segment;
    /// `None` for the fallback tier.
    pub display_name: Option<String>,
    /// Absolute URL the winning probe ran against; `None` for fallback.
    pub probe_url: Option<String>,
    /// Header metadata from the winning probe; `None` for fallback.
    pub meta: Option<ProbeMeta>,
}

/// Owned snapshot of the candidate configuration a pass runs against.
#[derive(Debug, Clone)]
pub struct ResolvePlan {
    /// Origin local candidates are probed against.
    pub origin: String,
    /// Local tier: site-relative paths, in priority order.
    pub local: Vec<String>,
    /// Base URL remote candidates are joined to.
    pub remote_base: String,
    /// Remote tier: bare filenames, in priority order.
    pub remote: Vec<String>,
    /// Applied when both tiers are exhausted.
    pub fallback: String,
}

impl ResolvePlan {
    pub fn from_config(cfg: &DlrConfig) -> Self {
        Self {
            origin: cfg.site.origin.clone(),
            local: cfg.site.local_candidates.clone(),
            remote_base: cfg.remote.base.clone(),
            remote: cfg.remote.candidates.clone(),
            fallback: cfg.remote.fallback.clone(),
        }
    }
}

/// Runs one resolution pass: strictly sequential probes, first success wins.
///
/// Probe misses are logged and skipped; a candidate whose URL cannot even be
/// formed is treated the same way. Each candidate is probed exactly once per
/// pass. Always returns a resolution: fallback tier when both lists are
/// exhausted.
pub fn resolve_pass(plan: &ResolvePlan, prober: &dyn Prober) -> Resolution {
    for path in &plan.local {
        let probe_url = match candidate::join_url(&plan.origin, path) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(candidate = %path, "skipping unjoinable local candidate: {err:#}");
                continue;
            }
        };
        match prober.probe(&probe_url) {
            Ok(meta) => {
                tracing::info!(url = %probe_url, "local download found");
                return Resolution {
                    tier: Tier::Local,
                    url: path.clone(),
                    display_name: candidate::display_name(path),
                    probe_url: Some(probe_url),
                    meta: Some(meta),
                };
            }
            Err(miss) => tracing::debug!(url = %probe_url, %miss, "local candidate miss"),
        }
    }

    for name in &plan.remote {
        let probe_url = match candidate::join_url(&plan.remote_base, name) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(candidate = %name, "skipping unjoinable remote candidate: {err:#}");
                continue;
            }
        };
        match prober.probe(&probe_url) {
            Ok(meta) => {
                tracing::info!(url = %probe_url, "remote download found");
                return Resolution {
                    tier: Tier::Remote,
                    url: probe_url.clone(),
                    display_name: candidate::display_name(name),
                    probe_url: Some(probe_url),
                    meta: Some(meta),
                };
            }
            Err(miss) => tracing::debug!(url = %probe_url, %miss, "remote candidate miss"),
        }
    }

    tracing::info!(fallback = %plan.fallback, "no direct download found; using releases page");
    Resolution {
        tier: Tier::Fallback,
        url: plan.fallback.clone(),
        display_name: None,
        probe_url: None,
        meta: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeMiss;
    use std::cell::RefCell;
    use std::collections::HashSet;

    struct FakeProber {
        hits: HashSet<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeProber {
        fn hits(urls: &[&str]) -> Self {
            Self {
                hits: urls.iter().map(|s| s.to_string()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prober for FakeProber {
        fn probe(&self, url: &str) -> Result<ProbeMeta, ProbeMiss> {
            self.calls.borrow_mut().push(url.to_string());
            if self.hits.contains(url) {
                Ok(ProbeMeta::default())
            } else {
                Err(ProbeMiss::Http(404))
            }
        }
    }

    fn plan() -> ResolvePlan {
        ResolvePlan {
            origin: "https://site.test/".to_string(),
            local: vec![
                "downloads/a.zip".to_string(),
                "downloads/b.zip".to_string(),
            ],
            remote_base: "https://host.test/dl/".to_string(),
            remote: vec!["a.zip".to_string(), "b.exe".to_string()],
            fallback: "https://host.test/releases".to_string(),
        }
    }

    #[test]
    fn local_hit_wins_even_when_remote_available() {
        let fake = FakeProber::hits(&[
            "https://site.test/downloads/b.zip",
            "https://host.test/dl/a.zip",
        ]);
        let res = resolve_pass(&plan(), &fake);
        assert_eq!(res.tier, Tier::Local);
        assert_eq!(res.url, "downloads/b.zip");
        assert_eq!(res.display_name.as_deref(), Some("b.zip"));
        assert_eq!(
            res.probe_url.as_deref(),
            Some("https://site.test/downloads/b.zip")
        );
    }

    #[test]
    fn first_succeeding_local_candidate_wins() {
        let fake = FakeProber::hits(&[
            "https://site.test/downloads/a.zip",
            "https://site.test/downloads/b.zip",
        ]);
        let res = resolve_pass(&plan(), &fake);
        assert_eq!(res.url, "downloads/a.zip");
    }

    #[test]
    fn remote_tier_when_local_exhausted() {
        let fake = FakeProber::hits(&["https://host.test/dl/b.exe"]);
        let res = resolve_pass(&plan(), &fake);
        assert_eq!(res.tier, Tier::Remote);
        assert_eq!(res.url, "https://host.test/dl/b.exe");
        assert_eq!(res.display_name.as_deref(), Some("b.exe"));
    }

    #[test]
    fn fallback_when_everything_misses() {
        let fake = FakeProber::hits(&[]);
        let res = resolve_pass(&plan(), &fake);
        assert_eq!(res.tier, Tier::Fallback);
        assert_eq!(res.url, "https://host.test/releases");
        assert_eq!(res.display_name, None);
        assert_eq!(res.probe_url, None);
        assert_eq!(res.meta, None);
    }

    #[test]
    fn probes_run_in_order_and_stop_at_first_hit() {
        let fake = FakeProber::hits(&["https://site.test/downloads/b.zip"]);
        resolve_pass(&plan(), &fake);
        assert_eq!(
            *fake.calls.borrow(),
            vec![
                "https://site.test/downloads/a.zip".to_string(),
                "https://site.test/downloads/b.zip".to_string(),
            ]
        );
    }

    #[test]
    fn exhausted_pass_probes_every_candidate_once() {
        let fake = FakeProber::hits(&[]);
        resolve_pass(&plan(), &fake);
        assert_eq!(fake.calls.borrow().len(), 4);
    }

    #[test]
    fn unjoinable_origin_falls_through_to_remote() {
        let mut p = plan();
        p.origin = "not a url".to_string();
        let fake = FakeProber::hits(&["https://host.test/dl/a.zip"]);
        let res = resolve_pass(&p, &fake);
        assert_eq!(res.tier, Tier::Remote);
        assert_eq!(res.url, "https://host.test/dl/a.zip");
    }

    // The concrete scenarios from the site's shipped candidate set.

    #[test]
    fn default_config_local_scenario() {
        let plan = ResolvePlan::from_config(&DlrConfig::default());
        let fake = FakeProber::hits(&[
            "https://xenonesis.github.io/sysmon/downloads/SystemMonitor-v1.0.0.zip",
        ]);
        let res = resolve_pass(&plan, &fake);
        assert_eq!(res.tier, Tier::Local);
        assert_eq!(res.url, "downloads/SystemMonitor-v1.0.0.zip");
        assert_eq!(
            res.display_name.as_deref(),
            Some("SystemMonitor-v1.0.0.zip")
        );
    }

    #[test]
    fn default_config_remote_scenario() {
        let plan = ResolvePlan::from_config(&DlrConfig::default());
        let fake = FakeProber::hits(&[
            "https://github.com/Xenonesis/sysmon/releases/latest/download/SystemMonitor-v1.0.0.zip",
        ]);
        let res = resolve_pass(&plan, &fake);
        assert_eq!(res.tier, Tier::Remote);
        assert_eq!(
            res.url,
            "https://github.com/Xenonesis/sysmon/releases/latest/download/SystemMonitor-v1.0.0.zip"
        );
    }

    #[test]
    fn default_config_exhaustion_scenario() {
        let plan = ResolvePlan::from_config(&DlrConfig::default());
        let fake = FakeProber::hits(&[]);
        let res = resolve_pass(&plan, &fake);
        assert_eq!(res.tier, Tier::Fallback);
        assert_eq!(res.url, "https://github.com/Xenonesis/sysmon/releases/latest");
    }
}
