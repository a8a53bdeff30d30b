//! Platform allow-list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A video platform the form accepts URLs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// YouTube.
    YouTube,
    /// TikTok.
    TikTok,
    /// Instagram.
    Instagram,
    /// Facebook.
    Facebook,
    /// Twitter / X.
    Twitter,
    /// Vimeo.
    Vimeo,
    /// Dailymotion.
    Dailymotion,
}

impl Platform {
    /// Every supported platform, in display order.
    pub const ALL: [Platform; 7] = [
        Platform::YouTube,
        Platform::TikTok,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::Vimeo,
        Platform::Dailymotion,
    ];

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::Vimeo => "Vimeo",
            Platform::Dailymotion => "Dailymotion",
        }
    }

    /// Registrable domains served by the platform.
    pub fn domains(&self) -> &'static [&'static str] {
        match self {
            Platform::YouTube => &["youtube.com", "youtu.be"],
            Platform::TikTok => &["tiktok.com"],
            Platform::Instagram => &["instagram.com"],
            Platform::Facebook => &["facebook.com", "fb.watch"],
            Platform::Twitter => &["twitter.com", "x.com"],
            Platform::Vimeo => &["vimeo.com"],
            Platform::Dailymotion => &["dailymotion.com", "dai.ly"],
        }
    }

    /// Whether `host` is one of the platform's domains or a subdomain of one.
    pub fn matches_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.domains().iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    /// Resolves a host against the allow-list.
    pub fn from_host(host: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.matches_host(host))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
