//! Periodic resolution: run a pass now and every interval thereafter.
//!
//! The async loop drives timing only; probe work runs on the blocking pool,
//! one pass at a time, so passes never overlap and the target set sees
//! last-write-wins updates in pass order.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::probe::Prober;
use crate::resolver::{resolve_pass, Resolution, ResolvePlan};
use crate::target::TargetSet;

/// Default delay between passes (the site's five-minute refresh).
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Delay between resolution passes.
    pub interval: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Runs one resolution pass on the blocking pool.
pub async fn run_pass(
    plan: &ResolvePlan,
    prober: &Arc<dyn Prober + Send + Sync>,
) -> Result<Resolution> {
    let plan = plan.clone();
    let prober = Arc::clone(prober);
    tokio::task::spawn_blocking(move || resolve_pass(&plan, prober.as_ref()))
        .await
        .context("resolution pass task failed")
}

/// Runs passes until `on_pass` returns false: one immediately, then one per
/// interval. Each pass's outcome is applied to `targets` before the callback
/// sees it. Tier and URL transitions between passes are logged.
pub async fn run_watch<F>(
    plan: &ResolvePlan,
    prober: Arc<dyn Prober + Send + Sync>,
    targets: &mut TargetSet,
    opts: WatchOptions,
    mut on_pass: F,
) -> Result<()>
where
    F: FnMut(&Resolution, &TargetSet) -> bool,
{
    let mut ticker = tokio::time::interval(opts.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last: Option<(crate::candidate::Tier, String)> = None;

    loop {
        ticker.tick().await;
        let res = run_pass(plan, &prober).await?;
        let current = (res.tier, res.url.clone());
        match &last {
            Some(prev) if *prev == current => {}
            Some(prev) => {
                tracing::info!(from = %prev.0, to = %current.0, url = %current.1, "resolution changed")
            }
            None => tracing::info!(tier = %current.0, url = %current.1, "initial resolution"),
        }
        last = Some(current);
        targets.apply(&res);
        if !on_pass(&res, targets) {
            return Ok(());
        }
    }
}
