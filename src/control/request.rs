//! Request lifecycle types shared between the client and its transports.

use super::Endpoint;
use reqwest::Url;

/// Identifier of one issued request, unique per client.
pub type RequestId = u64;

/// Lifecycle of a single request.
///
/// Values 0..=4 follow the usual request object lifecycle. Anything else a
/// transport reports is kept as `Unknown` so the client can log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Unsent,
    Opened,
    HeadersReceived,
    Loading,
    Done,
    Unknown(u16),
}

impl ReadyState {
    #[allow(dead_code)]
    pub fn from_raw(value: u16) -> Self {
        match value {
            0 => ReadyState::Unsent,
            1 => ReadyState::Opened,
            2 => ReadyState::HeadersReceived,
            3 => ReadyState::Loading,
            4 => ReadyState::Done,
            other => ReadyState::Unknown(other),
        }
    }
}

impl std::fmt::Display for ReadyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadyState::Unsent => write!(f, "UNSENT"),
            ReadyState::Opened => write!(f, "OPENED"),
            ReadyState::HeadersReceived => write!(f, "HEADERS_RECEIVED"),
            ReadyState::Loading => write!(f, "LOADING"),
            ReadyState::Done => write!(f, "DONE"),
            ReadyState::Unknown(value) => write!(f, "UNKNOWN({})", value),
        }
    }
}

/// A GET request handed to a transport.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub id: RequestId,
    pub endpoint: Endpoint,
    pub url: Url,
}

impl PendingRequest {
    /// Build the event reporting `state` for this request.
    pub fn event(&self, state: ReadyState, status: Option<u16>, response_text: String) -> RequestEvent {
        RequestEvent {
            id: self.id,
            endpoint: self.endpoint,
            state,
            status,
            response_text,
        }
    }
}

/// One ready-state change of one request.
#[derive(Debug, Clone)]
pub struct RequestEvent {
    pub id: RequestId,
    pub endpoint: Endpoint,
    pub state: ReadyState,
    /// HTTP status, once headers have been received.
    pub status: Option<u16>,
    /// Empty until the request is `Done`.
    pub response_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_map_to_lifecycle_states() {
        assert_eq!(ReadyState::from_raw(0), ReadyState::Unsent);
        assert_eq!(ReadyState::from_raw(2), ReadyState::HeadersReceived);
        assert_eq!(ReadyState::from_raw(4), ReadyState::Done);
        assert_eq!(ReadyState::from_raw(5), ReadyState::Unknown(5));
        assert_eq!(ReadyState::from_raw(5).to_string(), "UNKNOWN(5)");
    }

    #[test]
    fn event_carries_request_identity() {
        let request = PendingRequest {
            id: 9,
            endpoint: Endpoint::Test,
            url: Url::parse("http://localhost/api/test").unwrap(),
        };
        let event = request.event(ReadyState::Done, Some(200), "foo".to_string());
        assert_eq!(event.id, 9);
        assert_eq!(event.endpoint, Endpoint::Test);
        assert_eq!(event.response_text, "foo");
    }
}
