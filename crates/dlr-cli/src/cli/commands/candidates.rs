//! `dlr candidates` – show the configured candidate tiers and fallback.

use anyhow::Result;
use dlr_core::candidate;
use dlr_core::config::DlrConfig;

pub fn run_candidates(cfg: &DlrConfig) -> Result<()> {
    println!("local (origin {}):", cfg.site.origin);
    for path in &cfg.site.local_candidates {
        print_candidate(path, &cfg.site.origin);
    }
    println!("remote (base {}):", cfg.remote.base);
    for name in &cfg.remote.candidates {
        print_candidate(name, &cfg.remote.base);
    }
    println!("fallback:");
    println!("  {}", cfg.remote.fallback);
    Ok(())
}

fn print_candidate(candidate: &str, base: &str) {
    match candidate::join_url(base, candidate) {
        Ok(url) => println!("  {:<44} -> {}", candidate, url),
        Err(_) => println!("  {:<44} -> (unjoinable)", candidate),
    }
}
