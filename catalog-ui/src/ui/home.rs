use eframe::egui;

/// Landing page. Returns true when the user opens the products screen.
pub fn show(ui: &mut egui::Ui) -> bool {
    let mut open_products = false;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(egui::RichText::new("Management System").size(32.0));
        ui.label(
            egui::RichText::new("Manage your products simply and efficiently")
                .size(18.0)
                .weak(),
        );
        ui.add_space(30.0);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_width(320.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("📦").size(40.0));
                    ui.heading("Products");
                    ui.label("Register, edit and manage all of your products");
                    ui.add_space(10.0);
                    if ui.button("Open Products ➡").clicked() {
                        open_products = true;
                    }
                });
            });
    });

    open_products
}
