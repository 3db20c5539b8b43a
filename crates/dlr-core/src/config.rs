use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Local tier: candidates probed against the product site's own origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the static site that may host a downloads folder.
    pub origin: String,
    /// Site-relative paths tried in order; the first probe hit wins.
    pub local_candidates: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://xenonesis.github.io/sysmon/".to_string(),
            local_candidates: vec![
                "downloads/SystemMonitor-latest.zip".to_string(),
                "downloads/SystemMonitor-v1.0.0.zip".to_string(),
                "downloads/system-monitor-latest.exe".to_string(),
                "downloads/system-monitor-1.0.0.exe".to_string(),
            ],
        }
    }
}

/// Remote tier and fallback: the release host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL remote candidates are joined to (releases-by-tag download endpoint).
    pub base: String,
    /// Bare filenames tried in order once the local tier is exhausted.
    pub candidates: Vec<String>,
    /// Releases index page applied when both tiers are exhausted.
    pub fallback: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base: "https://github.com/Xenonesis/sysmon/releases/latest/download/".to_string(),
            candidates: vec![
                "SystemMonitor-v1.0.0.zip".to_string(),
                "system-monitor-setup.exe".to_string(),
                "system-monitor-installer.exe".to_string(),
                "system-monitor.exe".to_string(),
                "SystemMonitor.exe".to_string(),
            ],
            fallback: "https://github.com/Xenonesis/sysmon/releases/latest".to_string(),
        }
    }
}

/// Probe timeouts (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Connect timeout per probe, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per probe, in seconds.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// Watch loop timing (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Seconds between resolution passes.
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_secs: 300 }
    }
}

/// Release feed endpoint (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Latest-release API endpoint on the remote host.
    pub api_url: String,
    /// Installed product version to compare the feed against, if known.
    #[serde(default)]
    pub current_version: Option<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com/repos/Xenonesis/sysmon/releases/latest".to_string(),
            current_version: None,
        }
    }
}

/// Global configuration loaded from `~/.config/dlr/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DlrConfig {
    /// Local tier candidates and site origin.
    #[serde(default)]
    pub site: SiteConfig,
    /// Remote tier candidates, base URL, and fallback page.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Optional probe timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub probe: Option<ProbeConfig>,
    /// Optional watch timing; if missing, passes run every 300 seconds.
    #[serde(default)]
    pub watch: Option<WatchConfig>,
    /// Optional release feed settings for `dlr release`.
    #[serde(default)]
    pub release: Option<ReleaseConfig>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DlrConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init`, but against an explicit path (used by tests).
pub fn load_or_init_at(path: &Path) -> Result<DlrConfig> {
    if !path.exists() {
        let default_cfg = DlrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: DlrConfig = toml::from_str(&data)?;
    Ok(cfg)
}
