//! Client for the control API.

use super::{Endpoint, PendingRequest, ReadyState, RequestEvent, RequestEventQueue, RequestId, Transport};
use crate::display::DebugSurface;
use chrono::{DateTime, Local};
use reqwest::Url;
use std::collections::HashSet;

/// What the completion handler did with one ready-state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyStateOutcome {
    /// Intermediate state, or a late event for a request that already completed.
    Ignored,
    /// The request completed and its text replaced the display surface.
    Displayed,
    /// The transport reported a state outside the known lifecycle.
    Unhandled(u16),
}

/// Issues fire-and-forget control requests and mirrors the last completed
/// response into the display surface.
///
/// Requests are handed to the transport immediately. Their completion is only
/// applied when the owner calls [`ControlClient::pump`], so every write to the
/// surface happens on the thread that owns the client.
pub struct ControlClient<T: Transport> {
    base_url: Url,
    /// Resolved at construction and never requested.
    connection: Url,
    transport: T,
    surface: DebugSurface,
    events: &'static RequestEventQueue,
    next_id: RequestId,
    in_flight: HashSet<RequestId>,
    last_update: Option<(Endpoint, DateTime<Local>)>,
}

impl<T: Transport> ControlClient<T> {
    pub fn new(base_url: Url, transport: T, surface: DebugSurface, events: &'static RequestEventQueue) -> anyhow::Result<Self> {
        let connection = Endpoint::Client.resolve(&base_url)?;
        log::debug!("Control client for {} (connection {})", base_url, connection);

        Ok(Self {
            base_url,
            connection,
            transport,
            surface,
            events,
            next_id: 1,
            in_flight: HashSet::new(),
            last_update: None,
        })
    }

    pub fn start(&mut self) {
        self.request_template(Endpoint::Start);
    }

    pub fn stop(&mut self) {
        self.request_template(Endpoint::Stop);
    }

    pub fn ping(&mut self) {
        self.request_template(Endpoint::Ping);
    }

    pub fn test(&mut self) {
        self.request_template(Endpoint::Test);
    }

    /// Dispatch one of the four actions by endpoint.
    pub fn trigger(&mut self, endpoint: Endpoint) {
        match endpoint {
            Endpoint::Start => self.start(),
            Endpoint::Stop => self.stop(),
            Endpoint::Ping => self.ping(),
            Endpoint::Test => self.test(),
            Endpoint::Client => log::debug!("{} is not an action", endpoint),
        }
    }

    /// Issue a GET for `endpoint` without waiting for it.
    pub fn request_template(&mut self, endpoint: Endpoint) {
        let url = match endpoint.resolve(&self.base_url) {
            Ok(url) => url,
            Err(e) => {
                log::error!("{:#}", e);
                return;
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight.insert(id);

        log::debug!("GET {} #{}", url, id);
        self.transport.send(PendingRequest { id, endpoint, url }, self.events.sender());
    }

    /// Apply every queued ready-state change. Returns how many were processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.events.try_receive() {
            self.on_ready_state_change(event);
            processed += 1;
        }
        processed
    }

    /// Completion handler for one ready-state change.
    pub fn on_ready_state_change(&mut self, event: RequestEvent) -> ReadyStateOutcome {
        match event.state {
            ReadyState::Unsent | ReadyState::Opened | ReadyState::HeadersReceived | ReadyState::Loading => {
                log::trace!("{} #{} {}", event.endpoint, event.id, event.state);
                ReadyStateOutcome::Ignored
            }
            ReadyState::Done => {
                if !self.in_flight.remove(&event.id) {
                    log::debug!("Ignoring repeated completion of {} #{}", event.endpoint, event.id);
                    return ReadyStateOutcome::Ignored;
                }
                log::debug!(
                    "{} #{} done (status {:?}, {} bytes)",
                    event.endpoint,
                    event.id,
                    event.status,
                    event.response_text.len()
                );
                self.surface.replace(event.response_text);
                self.last_update = Some((event.endpoint, Local::now()));
                ReadyStateOutcome::Displayed
            }
            ReadyState::Unknown(value) => {
                log::warn!("Unhandled ready state {} for {} #{}", value, event.endpoint, event.id);
                ReadyStateOutcome::Unhandled(value)
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Endpoint and local time of the last surface write.
    pub fn last_update(&self) -> Option<(Endpoint, DateTime<Local>)> {
        self.last_update
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn connection(&self) -> &Url {
        &self.connection
    }

    pub fn surface(&self) -> &DebugSurface {
        &self.surface
    }
}
