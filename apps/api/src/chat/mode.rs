//! Chat mode selection. Decided once per resolver from configuration.

use std::fmt;

/// Public static-hosting domains. A dashboard served from one of these has
/// no private server to hold a credential, so live chat stays off.
const STATIC_HOST_SUFFIXES: &[&str] = &[
    "github.io",
    "netlify.app",
    "vercel.app",
    "pages.dev",
    "surge.sh",
    "web.app",
    "firebaseapp.com",
];

/// Whether a resolver talks to the chat backend or answers from canned text.
#[derive(Clone, PartialEq, Eq)]
pub enum ChatMode {
    Live { api_key: String },
    Mock,
}

impl ChatMode {
    /// Live only when a non-blank credential is present and the deployment
    /// host is not a public static-hosting environment.
    pub fn select(api_key: Option<&str>, deploy_host: Option<&str>) -> Self {
        let api_key = api_key.map(str::trim).filter(|k| !k.is_empty());
        let on_static_host = deploy_host.map(is_static_host).unwrap_or(false);

        match api_key {
            Some(key) if !on_static_host => ChatMode::Live {
                api_key: key.to_string(),
            },
            _ => ChatMode::Mock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChatMode::Live { .. } => "live",
            ChatMode::Mock => "mock",
        }
    }
}

// Keeps the credential out of logs.
impl fmt::Debug for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatMode::Live { .. } => f.write_str("Live { api_key: <redacted> }"),
            ChatMode::Mock => f.write_str("Mock"),
        }
    }
}

/// Matches a hostname (optionally with scheme or port) against the static-hosting list.
pub fn is_static_host(host: &str) -> bool {
    let host = host.trim().to_lowercase();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(&host);
    let host = host.split(['/', ':']).next().unwrap_or_default();
    let host = host.trim_end_matches('.');

    STATIC_HOST_SUFFIXES
        .iter()
        .any(|suffix| host == *suffix || host.ends_with(&format!(".{suffix}")))
}
