use catalog_core::NotificationLevel;
use eframe::egui;

use crate::state_manager::Toast;

/// Stacks toasts in the bottom-right corner. Returns the index the user dismissed.
pub fn show(ctx: &egui::Context, toasts: &[Toast]) -> Option<usize> {
    if toasts.is_empty() {
        return None;
    }

    let mut dismissed = None;

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for (index, toast) in toasts.iter().enumerate() {
                let color = match toast.notification.level {
                    NotificationLevel::Success => egui::Color32::from_rgb(0, 200, 80),
                    NotificationLevel::Error => egui::Color32::from_rgb(230, 60, 60),
                };

                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.0, color))
                    .show(ui, |ui| {
                        ui.set_width(300.0);
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.colored_label(
                                    color,
                                    egui::RichText::new(&toast.notification.title).strong(),
                                );
                                ui.label(&toast.notification.message);
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::TOP),
                                |ui| {
                                    if ui.small_button("✖").clicked() {
                                        dismissed = Some(index);
                                    }
                                },
                            );
                        });
                    });
                ui.add_space(6.0);
            }
        });

    dismissed
}
