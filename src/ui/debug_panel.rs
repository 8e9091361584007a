//! # Debug Panel
//!
//! Renders the display surface: the raw text of the last completed request,
//! exactly as received.

use crate::ui::AppState;
use egui::{Label, RichText};

pub fn render(ctx: &egui::Context, state: &AppState) {
    let surface = state.client.surface();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(surface.id());
        ui.separator();

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.add(Label::new(RichText::new(surface.content()).monospace()).selectable(true));
        });
    });
}
