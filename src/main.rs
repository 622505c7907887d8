// src/main.rs
//
// Testeur de motifs : fenêtre native ou canvas web autour de detecteur_motifs::noyau.
// Web : index.html fournit <canvas id="the_canvas_id"></canvas>.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppMotifs;

const TITRE_APP: &str = "Testeur de motifs";

fn creer_app(_cc: &eframe::CreationContext<'_>) -> Box<dyn eframe::App> {
    Box::<AppMotifs>::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("démarrage {TITRE_APP}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([380.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(TITRE_APP, options, Box::new(|cc| Ok(creer_app(cc))))
}

// wasm32 : le démarrage passe par `web::start` (wasm_bindgen start)
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let canvas = canvas_du_document()?;
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(super::creer_app(cc))),
            )
            .await
    }

    /// Renomme l’onglet puis trouve le canvas cible.
    fn canvas_du_document() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document indisponible"))?;
        document.set_title(super::TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas introuvable"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("l’élément n’est pas un <canvas>"))
    }
}
