// ============================================================================
// WEATHER & TRAFFIC - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica de clima, SDK, mapa y modal
// - Services: SOLO comunicación HTTP / carga de assets
// - State: State Management con Rc<RefCell>
// - Models: Estructuras del backend y de TomTom
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod maps;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 [APP] Weather & Traffic ({})", CONFIG.environment);

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

fn with_app(action: impl FnOnce(&App)) {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => action(app),
        None => log::warn!("⚠️ [APP] App no inicializada"),
    });
}

/// Abrir el modal desde JavaScript
#[wasm_bindgen]
pub fn open_weather_modal() {
    with_app(App::open_modal);
}

/// Cerrar el modal desde JavaScript
#[wasm_bindgen]
pub fn close_weather_modal() {
    with_app(App::close_modal);
}
