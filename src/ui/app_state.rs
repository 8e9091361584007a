//! # Application State Management
//!
//! `AppState` owns the control client and implements `eframe::App`. Every frame
//! it first applies the ready-state changes queued by request workers, then
//! renders the panels. Completion handlers therefore only ever run on the UI
//! thread, one after another.

use std::time::Duration;

use super::{debug_panel, top_panel};
use crate::control::{ControlClient, HttpTransport};

/// Interval between repaints while idle, so completed requests show up without input.
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct AppState {
    pub client: ControlClient<HttpTransport>,
}

impl AppState {
    pub fn new(client: ControlClient<HttpTransport>) -> Self {
        Self { client }
    }
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let processed = self.client.pump();
        if processed > 0 {
            log::trace!("Applied {} request events", processed);
        }

        ctx.request_repaint_after(IDLE_REPAINT_INTERVAL);

        top_panel::render(ctx, self);
        debug_panel::render(ctx, self);
    }
}
