//! Link targets: the button-like elements and info line a resolution is
//! applied to.
//!
//! Mirrors the site contract: up to two buttons with fixed logical roles and
//! one optional informational text element. Absent elements are skipped, not
//! errors. `apply` writes one resolution to every present element, so a pass
//! can never leave targets on mixed tiers.

use crate::candidate::{safe_save_name, Tier};
use crate::resolver::Resolution;

/// Fixed logical roles for button-like targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRole {
    HeroButton,
    SectionButton,
}

impl std::fmt::Display for TargetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TargetRole::HeroButton => "hero",
            TargetRole::SectionButton => "section",
        };
        f.write_str(s)
    }
}

/// One button-like link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub role: TargetRole,
    /// Currently applied URL; `None` until the first pass lands.
    pub href: Option<String>,
    /// Suggested save-name; set for the local and remote tiers only.
    pub save_name: Option<String>,
    /// Whether activation should open a new browsing context.
    pub open_in_new_context: bool,
}

impl LinkTarget {
    fn new(role: TargetRole) -> Self {
        Self {
            role,
            href: None,
            save_name: None,
            open_in_new_context: false,
        }
    }
}

/// The optional informational text element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoText {
    pub text: String,
}

/// The set of link targets one resolution pass updates atomically.
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    targets: Vec<LinkTarget>,
    info: Option<InfoText>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard site set: hero and section buttons plus the info line.
    pub fn standard() -> Self {
        Self::new()
            .with_target(TargetRole::HeroButton)
            .with_target(TargetRole::SectionButton)
            .with_info()
    }

    pub fn with_target(mut self, role: TargetRole) -> Self {
        self.targets.push(LinkTarget::new(role));
        self
    }

    pub fn with_info(mut self) -> Self {
        self.info = Some(InfoText {
            text: String::new(),
        });
        self
    }

    pub fn targets(&self) -> &[LinkTarget] {
        &self.targets
    }

    /// Current info text, or `None` if the element is absent.
    pub fn info_text(&self) -> Option<&str> {
        self.info.as_ref().map(|i| i.text.as_str())
    }

    /// Applies one resolution to every present element.
    ///
    /// All buttons receive the same URL. The save-name and new-context flag
    /// are set for the local and remote tiers and cleared for fallback. The
    /// info element, if present, receives the tier message.
    pub fn apply(&mut self, res: &Resolution) {
        let save_name = match res.tier {
            Tier::Fallback => None,
            Tier::Local | Tier::Remote => {
                res.display_name.as_deref().and_then(safe_save_name)
            }
        };
        for target in &mut self.targets {
            target.href = Some(res.url.clone());
            target.save_name = save_name.clone();
            target.open_in_new_context = res.tier != Tier::Fallback;
        }
        if let Some(info) = &mut self.info {
            info.text = info_message(res);
        }
    }
}

/// Tier-appropriate informational message.
pub fn info_message(res: &Resolution) -> String {
    let name = res.display_name.as_deref().unwrap_or("download");
    match res.tier {
        Tier::Local => format!("{name} • Latest version available locally"),
        Tier::Remote => format!("{name} • Downloading from GitHub"),
        Tier::Fallback => "Visit Releases page for latest version".to_string(),
    }
}
