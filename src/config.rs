//! Immutable session configuration.

use std::path::PathBuf;

/// Keywords tried by the default comparison flow, in order.
///
/// These target the premium/paywall checks that rebuilt packages most
/// often touch. `sharedPrefences` is spelled the way it commonly
/// appears in the wild.
pub const DEFAULT_KEYWORDS: [&str; 14] = [
    "isPro",
    "isPremium",
    "isVip",
    "isPurchased",
    "isActive",
    "isUser",
    "sharedPrefences",
    "pro",
    "premium",
    "vip",
    "lifetime",
    "purchased",
    "unlimited",
    "unlocked",
];

/// Configuration handed to the session orchestrator.
///
/// Built once at startup and never mutated; there is no module-level
/// state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Keywords for the default comparison flow.
    pub keywords: Vec<String>,
    /// Class-file extension, without the dot.
    pub extension: String,
    /// Append-only log for method-name differences, when set.
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect(),
            extension: "smali".to_string(),
            log_path: None,
        }
    }
}
