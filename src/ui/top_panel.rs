//! # Top Panel - Controls
//!
//! One button per control action plus a status line showing the base URL,
//! the number of requests still in flight and when the display was last
//! written.

use crate::control::Endpoint;
use crate::ui::AppState;
use egui::RichText;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.heading("Controls");
        ui.separator();

        ui.horizontal(|ui| {
            for endpoint in Endpoint::ACTIONS {
                if ui.button(endpoint.label()).clicked() {
                    log::debug!("{} clicked", endpoint.label());
                    state.client.trigger(endpoint);
                }
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("API:");
            ui.label(RichText::new(state.client.base_url().as_str()).monospace());
            ui.label("In flight:");
            ui.label(RichText::new(format!("{:<3}", state.client.in_flight())).monospace().strong());
            ui.label("Last update:");
            let last_update = match state.client.last_update() {
                Some((endpoint, at)) => format!("{} at {}", endpoint, at.format("%H:%M:%S")),
                None => "-".to_string(),
            };
            ui.label(RichText::new(last_update).strong());
        });
        ui.add_space(4.0);
    });
}
