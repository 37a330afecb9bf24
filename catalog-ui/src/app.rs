use catalog_core::{CatalogAction, CatalogConfig};
use eframe::egui;

use crate::state_manager::CatalogStateManager;
use crate::ui;
use crate::wasm_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Products,
}

/// Product catalog application: a landing screen plus the products screen.
pub struct CatalogApp {
    state: CatalogStateManager,
    screen: Screen,
}

impl CatalogApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CatalogConfig) -> Self {
        wasm_utils::set_panic_hook();
        log::info!("Starting product catalog against {}", config.base_url);

        Self {
            state: CatalogStateManager::new(config),
            screen: Screen::Home,
        }
    }

    fn show_products(&mut self, ctx: &egui::Context, actions: &mut Vec<CatalogAction>) {
        let view = self.state.view();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::catalog::header(ui, &view, actions);
            ui.separator();
            ui::catalog::search_bar(ui, &view, actions);
            ui.add_space(8.0);
            ui::catalog::cards(ui, &view, actions);
        });

        if let Some(form) = &view.form {
            ui::dialogs::product_form(ctx, form, actions);
        }
        if let Some(prompt) = &view.delete_prompt {
            ui::dialogs::delete_prompt(ctx, prompt, actions);
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // Update state from async operations
        self.state.update_from_async(now);

        if self.screen == Screen::Products {
            self.state.ensure_loaded();
        }

        // Keep polling while requests are out or toasts are counting down
        if self.state.is_busy() || !self.state.toasts().is_empty() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.screen == Screen::Products && ui.button("⬅ Home").clicked() {
                    self.screen = Screen::Home;
                }
                ui.heading("📦 Product Catalog");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(self.state.base_url()).small().weak());
                });
            });
        });

        let mut actions = Vec::new();
        match self.screen {
            Screen::Home => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if ui::home::show(ui) {
                        self.screen = Screen::Products;
                    }
                });
            }
            Screen::Products => self.show_products(ctx, &mut actions),
        }

        if let Some(index) = ui::toasts::show(ctx, self.state.toasts()) {
            self.state.dismiss_toast(index);
        }

        for action in actions {
            self.state.dispatch(action);
        }
    }
}
