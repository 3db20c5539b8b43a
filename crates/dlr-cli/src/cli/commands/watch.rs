//! `dlr watch` – run resolution passes on a fixed interval.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use dlr_core::config::DlrConfig;
use dlr_core::probe::{CurlProber, Prober};
use dlr_core::resolver::ResolvePlan;
use dlr_core::target::TargetSet;
use dlr_core::watch::{self, WatchOptions};

pub async fn run_watch(cfg: &DlrConfig, interval_override: Option<u64>) -> Result<()> {
    let plan = ResolvePlan::from_config(cfg);
    let prober: Arc<dyn Prober + Send + Sync> =
        Arc::new(CurlProber::from_config(&cfg.probe.clone().unwrap_or_default()));
    let interval = interval_override
        .or_else(|| cfg.watch.as_ref().map(|w| w.interval_secs))
        .map(Duration::from_secs)
        .unwrap_or(watch::DEFAULT_INTERVAL);

    println!("watching every {}s (Ctrl-C to stop)", interval.as_secs());
    let mut targets = TargetSet::standard();
    let mut pass = 0u64;
    watch::run_watch(
        &plan,
        prober,
        &mut targets,
        WatchOptions { interval },
        |res, applied| {
            pass += 1;
            println!(
                "[pass {}] tier={} url={} | {}",
                pass,
                res.tier,
                res.url,
                applied.info_text().unwrap_or("")
            );
            true
        },
    )
    .await
}
