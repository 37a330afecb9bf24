// Desktop entry point for the product catalog
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use anyhow::Result;
    use catalog_core::config::DEFAULT_BASE_URL;
    use catalog_core::CatalogConfig;
    use catalog_ui::app::CatalogApp;
    use clap::Parser;

    #[derive(Parser, Debug)]
    #[command(name = "catalog-desktop")]
    #[command(about = "Desktop client for the product catalog service", long_about = None)]
    pub struct Args {
        /// Base URL of the product service
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        pub base_url: String,
    }

    pub async fn run() -> Result<()> {
        env_logger::init();

        let args = Args::parse();
        let config = CatalogConfig::new(&args.base_url)?;

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 800.0])
                .with_min_inner_size([720.0, 480.0])
                .with_title("Product Catalog"),
            ..Default::default()
        };

        eframe::run_native(
            "Product Catalog",
            native_options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
                Ok(Box::new(CatalogApp::new(cc, config)))
            }),
        )
        .map_err(|e| anyhow::anyhow!("Failed to start the desktop window: {e}"))
    }

}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    desktop::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
