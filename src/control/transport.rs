//! Transports issue requests and report their ready-state changes.

use super::{PendingRequest, ReadyState, RequestEvent, RequestEventSender};
use anyhow::Context;
use reqwest::blocking::Client;
use std::thread;

/// Issues a GET for a [`PendingRequest`] without waiting for it.
///
/// Implementations must return immediately and push every ready-state change
/// of the request to `events`, finishing with exactly one `Done` event unless
/// the request hangs forever.
pub trait Transport: Send + Sync {
    fn send(&self, request: PendingRequest, events: RequestEventSender);
}

/// HTTP transport running each request on its own worker thread.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> anyhow::Result<Self> {
        // No timeout: a request that never answers simply never completes.
        let client = Client::builder()
            .timeout(None)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: PendingRequest, events: RequestEventSender) {
        let client = self.client.clone();
        let worker_request = request.clone();
        let spawned = thread::Builder::new()
            .name(format!("request-{}", request.id))
            .spawn(move || run_request(&client, &worker_request, events));

        if let Err(e) = spawned {
            log::error!("Failed to spawn worker for {} #{}: {}", request.endpoint, request.id, e);
            fail_request(&request, events);
        }
    }
}

fn run_request(client: &Client, request: &PendingRequest, events: RequestEventSender) {
    emit(events, request.event(ReadyState::Opened, None, String::new()));

    let response = match client.get(request.url.clone()).send() {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Request {} #{} failed: {}", request.url, request.id, e);
            fail_request(request, events);
            return;
        }
    };

    let status = response.status().as_u16();
    emit(events, request.event(ReadyState::HeadersReceived, Some(status), String::new()));
    emit(events, request.event(ReadyState::Loading, Some(status), String::new()));

    let text = response.text().unwrap_or_else(|e| {
        log::warn!("Reading body of {} #{} failed: {}", request.url, request.id, e);
        String::new()
    });
    emit(events, request.event(ReadyState::Done, Some(status), text));
}

/// Complete a request that produced no response: no status, empty text.
fn fail_request(request: &PendingRequest, events: RequestEventSender) {
    emit(events, request.event(ReadyState::Done, None, String::new()));
}

/// Queue an event, waiting for room rather than dropping it.
fn emit(events: RequestEventSender, event: RequestEvent) {
    embassy_futures::block_on(events.send(event));
}
