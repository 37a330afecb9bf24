use catalog_core::view::{DeletePrompt, FormView};
use catalog_core::CatalogAction;
use eframe::egui;

pub fn product_form(ctx: &egui::Context, form: &FormView, actions: &mut Vec<CatalogAction>) {
    let mut code = form.code.clone();
    let mut description = form.description.clone();

    egui::Window::new(form.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(form.subtitle).weak());
            ui.add_space(8.0);

            egui::Grid::new("product_form_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Code *");
                    let response = ui.add_enabled(
                        form.code_editable,
                        egui::TextEdit::singleline(&mut code)
                            .hint_text("Product code (numbers only)"),
                    );
                    if response.changed() {
                        actions.push(CatalogAction::SetCodeInput(code.clone()));
                    }
                    ui.end_row();

                    ui.label("Product name *");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut description).hint_text("Product name"),
                    );
                    if response.changed() {
                        actions.push(CatalogAction::SetDescriptionInput(description.clone()));
                    }
                    ui.end_row();
                });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button(form.submit_label).clicked() {
                    actions.push(CatalogAction::SubmitForm);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(CatalogAction::CancelForm);
                }
            });
        });
}

pub fn delete_prompt(ctx: &egui::Context, prompt: &DeletePrompt, actions: &mut Vec<CatalogAction>) {
    egui::Window::new(prompt.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&prompt.message);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    actions.push(CatalogAction::CancelDelete);
                }
                let confirm = egui::Button::new(
                    egui::RichText::new("Delete").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(180, 40, 40));
                if ui.add(confirm).clicked() {
                    actions.push(CatalogAction::ConfirmDelete);
                }
            });
        });
}
