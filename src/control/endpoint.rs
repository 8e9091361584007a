//! Fixed endpoint set of the control API.

use anyhow::Context;
use reqwest::Url;

/// Endpoints exposed by the control API, relative to the page origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Stop,
    Ping,
    Test,
    /// Connection handle resolved at client construction. Never requested.
    /// Origin-absolute, unlike the actions.
    Client,
}

impl Endpoint {
    /// The four actions a user can trigger, in button order.
    pub const ACTIONS: [Endpoint; 4] = [Endpoint::Start, Endpoint::Stop, Endpoint::Ping, Endpoint::Test];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Start => "api/start",
            Endpoint::Stop => "api/stop",
            Endpoint::Ping => "api/ping",
            Endpoint::Test => "api/test",
            Endpoint::Client => "/api/client",
        }
    }

    /// Button caption used by the controls panel.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Start => "Start",
            Endpoint::Stop => "Stop",
            Endpoint::Ping => "Ping",
            Endpoint::Test => "Test",
            Endpoint::Client => "Client",
        }
    }

    /// Resolve the path against `base` the way a browser resolves a reference
    /// against the page URL.
    pub fn resolve(self, base: &Url) -> anyhow::Result<Url> {
        base.join(self.path()).with_context(|| format!("Failed to resolve {} against {}", self.path(), base))
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_cover_the_four_fixed_paths() {
        let paths: Vec<_> = Endpoint::ACTIONS.iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["api/start", "api/stop", "api/ping", "api/test"]);
        assert!(!Endpoint::ACTIONS.contains(&Endpoint::Client));
    }

    #[test]
    fn resolve_joins_against_origin_root() {
        let base = Url::parse("http://localhost:8080/").unwrap();
        assert_eq!(Endpoint::Ping.resolve(&base).unwrap().as_str(), "http://localhost:8080/api/ping");
    }

    #[test]
    fn resolve_is_relative_to_page_directory() {
        let base = Url::parse("http://example.org/monitor/index.html").unwrap();
        assert_eq!(Endpoint::Start.resolve(&base).unwrap().as_str(), "http://example.org/monitor/api/start");

        let no_slash = Url::parse("http://example.org/monitor").unwrap();
        assert_eq!(Endpoint::Stop.resolve(&no_slash).unwrap().as_str(), "http://example.org/api/stop");
    }

    #[test]
    fn client_handle_resolves_against_origin() {
        let base = Url::parse("http://example.org/monitor/index.html").unwrap();
        assert_eq!(Endpoint::Client.resolve(&base).unwrap().as_str(), "http://example.org/api/client");
    }
}
