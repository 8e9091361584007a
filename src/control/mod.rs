//! Control module for driving the remote control API.
//!
//! The monitor talks to the API through four fixed endpoints. Every request is
//! fire-and-forget: it is handed to a [`Transport`] which reports ready-state
//! changes back through the request event queue, and the UI thread applies
//! them to the display surface via [`ControlClient::pump`].

pub mod client;
pub mod config;
pub mod endpoint;
pub mod request;
pub mod transport;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub use client::ControlClient;
pub use config::MonitorConfig;
pub use endpoint::Endpoint;
pub use request::{PendingRequest, ReadyState, RequestEvent, RequestId};
pub use transport::{HttpTransport, Transport};

pub const REQUEST_EVENT_QUEUE_SIZE: usize = 64;
pub type RequestEventQueue = embassy_sync::channel::Channel<CriticalSectionRawMutex, RequestEvent, REQUEST_EVENT_QUEUE_SIZE>;
pub type RequestEventSender = embassy_sync::channel::Sender<'static, CriticalSectionRawMutex, RequestEvent, REQUEST_EVENT_QUEUE_SIZE>;

/// Allocate the request event queue for the lifetime of the process.
pub fn leak_request_event_queue() -> &'static RequestEventQueue {
    Box::leak(Box::new(RequestEventQueue::new()))
}
