//! `dlr release` – check the latest release on the remote host.

use anyhow::Result;
use dlr_core::config::DlrConfig;
use dlr_core::release;

pub async fn run_release(cfg: &DlrConfig) -> Result<()> {
    let release_cfg = cfg.release.clone().unwrap_or_default();
    let fetched = {
        let fetch_cfg = release_cfg.clone();
        tokio::task::spawn_blocking(move || release::fetch_latest(&fetch_cfg)).await??
    };

    println!("latest release: {}", fetched.tag_name);
    match release::direct_download_asset(&fetched) {
        Some(asset) => println!("direct asset:   {} ({})", asset.name, asset.browser_download_url),
        None => println!("direct asset:   none"),
    }
    if let Some(current) = &release_cfg.current_version {
        let info = release::check_update(&fetched, current);
        if info.update_available {
            println!(
                "update:         {} -> {} available",
                info.current_version, info.latest_version
            );
        } else {
            println!("update:         {} is current", info.current_version);
        }
    }
    Ok(())
}
