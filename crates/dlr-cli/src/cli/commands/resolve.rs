//! `dlr resolve` – run one resolution pass and print the outcome.

use anyhow::Result;
use std::sync::Arc;

use dlr_core::config::DlrConfig;
use dlr_core::probe::{CurlProber, Prober};
use dlr_core::resolver::ResolvePlan;
use dlr_core::target::TargetSet;
use dlr_core::watch;

pub async fn run_resolve(cfg: &DlrConfig) -> Result<()> {
    let plan = ResolvePlan::from_config(cfg);
    let prober: Arc<dyn Prober + Send + Sync> =
        Arc::new(CurlProber::from_config(&cfg.probe.clone().unwrap_or_default()));

    let res = watch::run_pass(&plan, &prober).await?;
    let mut targets = TargetSet::standard();
    targets.apply(&res);

    println!("tier     {}", res.tier);
    println!("url      {}", res.url);
    if let Some(name) = &res.display_name {
        println!("save as  {}", name);
    }
    if let Some(size) = res.meta.as_ref().and_then(|m| m.content_length) {
        println!("size     {} bytes", size);
    }
    if let Some(info) = targets.info_text() {
        println!("info     {}", info);
    }
    for target in targets.targets() {
        println!(
            "{:<8} -> {}{}",
            target.role,
            target.href.as_deref().unwrap_or("-"),
            if target.open_in_new_context {
                " (new context)"
            } else {
                ""
            }
        );
    }
    Ok(())
}
