// src/main.rs
//
// Calculatrice scientifique — point d'entrée natif
// ------------------------------------------------
// - eframe::run_native + NativeOptions (géométrie de la fenêtre d'origine)
// - journal : RUST_LOG=debug pour voir le détail typé des fautes aplaties
//   en "Error" par la vue

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice scientifique";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([600.0, 800.0])
            .with_min_inner_size([500.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
