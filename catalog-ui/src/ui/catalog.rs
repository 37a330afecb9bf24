use catalog_core::view::ProductCard;
use catalog_core::{CatalogAction, CatalogView};
use eframe::egui;

const CARD_COLUMNS: usize = 3;
const CARD_WIDTH: f32 = 260.0;

pub fn header(ui: &mut egui::Ui, view: &CatalogView, actions: &mut Vec<CatalogAction>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new("Product Management").size(26.0));
            ui.label(egui::RichText::new("Manage your store's product catalog").weak());
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ New Product").clicked() {
                actions.push(CatalogAction::OpenCreate);
            }
            if view.busy {
                ui.spinner();
            }
        });
    });
}

pub fn search_bar(ui: &mut egui::Ui, view: &CatalogView, actions: &mut Vec<CatalogAction>) {
    let mut term = view.search_term.clone();

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("Search by product name or code...")
                .desired_width(320.0),
        );
        if response.changed() {
            actions.push(CatalogAction::SetSearchTerm(term.clone()));
        }

        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("🔍 Search").clicked() || enter_pressed {
            actions.push(CatalogAction::Search);
        }

        if !term.is_empty() && ui.small_button("✖ Clear").clicked() {
            actions.push(CatalogAction::ClearSearch);
        }
    });

    if let Some(hint) = &view.result_hint {
        ui.label(egui::RichText::new(hint).small().weak());
    }
}

pub fn cards(ui: &mut egui::Ui, view: &CatalogView, actions: &mut Vec<CatalogAction>) {
    if view.empty {
        empty_state(ui, actions);
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("product_cards")
            .num_columns(CARD_COLUMNS)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for row in view.cards.chunks(CARD_COLUMNS) {
                    for card in row {
                        product_card(ui, card, actions);
                    }
                    ui.end_row();
                }
            });
    });
}

fn product_card(ui: &mut egui::Ui, card: &ProductCard, actions: &mut Vec<CatalogAction>) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&card.title).strong().size(16.0));
                ui.label(egui::RichText::new(&card.subtitle).weak());
                ui.add_space(8.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = egui::Button::new(
                        egui::RichText::new("🗑 Delete").color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(180, 40, 40));
                    if ui.add(delete).clicked() {
                        actions.push(CatalogAction::RequestDelete { code: card.code });
                    }
                    if ui.button("✏ Edit").clicked() {
                        actions.push(CatalogAction::OpenEdit { code: card.code });
                    }
                });
            });
        });
}

fn empty_state(ui: &mut egui::Ui, actions: &mut Vec<CatalogAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(egui::RichText::new("No products registered").size(18.0).weak());
        ui.add_space(12.0);
        if ui.button("➕ Add first product").clicked() {
            actions.push(CatalogAction::OpenCreate);
        }
    });
}
