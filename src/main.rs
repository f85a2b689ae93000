use nsi_revision::RevisionApp;

#[cfg(not(target_arch = "wasm32"))]
const WINDOW_TITLE: &str = "NSI Première - Révisions";

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "the_canvas_id";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Nivel de log con RUST_LOG (p. ej. RUST_LOG=nsi_revision=debug)
    pretty_env_logger::init();
    log::info!("Arrancando {WINDOW_TITLE} v{}", env!("CARGO_PKG_VERSION"));

    let app = match RevisionApp::new() {
        Ok(app) => app,
        Err(e) => {
            log::error!("Contenido inválido: {e}");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app))))
}

// ===== SOLO PARA WEB =====
#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .expect("No se encontró el canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("El elemento no es un canvas");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(RevisionApp::new()?))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar la app web: {e:?}");
        }
    });
}
