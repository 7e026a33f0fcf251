//! User-agent classification for request telemetry.
//!
//! DESIGN
//! ======
//! Two ordered lists of substring predicates over the lower-cased header,
//! one for the operating system and one for the browser; the first match in
//! each list wins. Every input yields a label, so callers never handle errors.
//!
//! The macOS predicate excludes `iphone`/`ipad` because iOS user agents
//! contain "like Mac OS X". Android user agents contain `linux` and report
//! Linux, since the Linux predicate comes first.

#[cfg(test)]
#[path = "user_agent_test.rs"]
mod user_agent_test;

use std::fmt;

/// Label returned for an empty or missing header.
pub const UNKNOWN: &str = "Unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Os {
    Windows10,
    Windows81,
    Windows8,
    Windows7,
    Windows,
    MacOs,
    Linux,
    Android,
    Ios,
    Unknown,
}

impl Os {
    fn detect(ua: &str) -> Self {
        if ua.contains("windows nt 10") {
            Self::Windows10
        } else if ua.contains("windows nt 6.3") {
            Self::Windows81
        } else if ua.contains("windows nt 6.2") {
            Self::Windows8
        } else if ua.contains("windows nt 6.1") {
            Self::Windows7
        } else if ua.contains("windows") {
            Self::Windows
        } else if ua.contains("mac os x") && !is_apple_mobile(ua) {
            Self::MacOs
        } else if ua.contains("linux") {
            Self::Linux
        } else if ua.contains("android") {
            Self::Android
        } else if is_apple_mobile(ua) {
            Self::Ios
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Windows10 => "Windows 10",
            Self::Windows81 => "Windows 8.1",
            Self::Windows8 => "Windows 8",
            Self::Windows7 => "Windows 7",
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Unknown => "Unknown OS",
        }
    }
}

fn is_apple_mobile(ua: &str) -> bool {
    ua.contains("iphone") || ua.contains("ipad")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Browser {
    Edge,
    Chrome,
    Firefox,
    Safari,
    Opera,
    Unknown,
}

impl Browser {
    fn detect(ua: &str) -> Self {
        // Edge and Opera UAs also carry `chrome/` and `safari/` tokens.
        if ua.contains("edg/") {
            Self::Edge
        } else if ua.contains("chrome/") && !ua.contains("edg/") {
            Self::Chrome
        } else if ua.contains("firefox/") {
            Self::Firefox
        } else if ua.contains("safari/") && !ua.contains("chrome/") {
            Self::Safari
        } else if ua.contains("opera/") || ua.contains("opr/") {
            Self::Opera
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Edge => "Edge",
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Opera => "Opera",
            Self::Unknown => "Unknown Browser",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operating system and browser detected from one user-agent string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClientPlatform {
    pub os: Os,
    pub browser: Browser,
}

impl ClientPlatform {
    #[must_use]
    pub fn detect(raw: &str) -> Self {
        let ua = raw.to_lowercase();
        Self {
            os: Os::detect(&ua),
            browser: Browser::detect(&ua),
        }
    }
}

impl fmt::Display for ClientPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.os, self.browser)
    }
}

/// Render a user-agent header as `"<OS> - <Browser>"`.
///
/// Empty or missing input yields [`UNKNOWN`].
#[must_use]
pub fn classify(raw: Option<&str>) -> String {
    match raw {
        Some(ua) if !ua.is_empty() => ClientPlatform::detect(ua).to_string(),
        _ => UNKNOWN.to_owned(),
    }
}
