//! Location links that open a maps app suited to the visitor's platform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the percent-encoded location in link templates.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Client platform, as far as picking a maps app is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    #[default]
    Desktop,
}

impl Platform {
    /// Guess the platform from a `User-Agent` string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if ["iPhone", "iPad", "iPod"].iter().any(|d| user_agent.contains(d)) {
            Platform::Ios
        } else if user_agent.contains("Android") {
            Platform::Android
        } else {
            Platform::Desktop
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Desktop => "desktop",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "desktop" => Ok(Platform::Desktop),
            other => Err(format!("Unknown platform '{other}'. Expected ios, android or desktop")),
        }
    }
}

fn default_ios() -> String {
    "comgooglemaps://?q={query}".to_string()
}

fn default_android() -> String {
    "geo:0,0?q={query}".to_string()
}

fn default_desktop() -> String {
    "https://www.google.com/maps/search/?api=1&query={query}".to_string()
}

/// Per-platform link templates. Each template must contain `{query}`.
///
/// Touch platforms get a maps-app URI, everything else a map search URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLinkPolicy {
    #[serde(default = "default_ios")]
    pub ios: String,
    #[serde(default = "default_android")]
    pub android: String,
    #[serde(default = "default_desktop")]
    pub desktop: String,
}

impl Default for MapLinkPolicy {
    fn default() -> Self {
        MapLinkPolicy {
            ios: default_ios(),
            android: default_android(),
            desktop: default_desktop(),
        }
    }
}

impl MapLinkPolicy {
    pub fn template(&self, platform: Platform) -> &str {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
            Platform::Desktop => &self.desktop,
        }
    }

    /// Link target for `location` on `platform`.
    pub fn link_for(&self, platform: Platform, location: &str) -> String {
        let encoded = urlencoding::encode(location);
        self.template(platform).replace(QUERY_PLACEHOLDER, &encoded)
    }
}
