// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Construye los viewmodels con sus implementaciones web, monta el DOM en #app
// y conecta cada cambio de estado con su actualización incremental.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{apply_all, apply_update, get_element_by_id};
use crate::error::describe_js;
use crate::maps::TomTomBackend;
use crate::services::{ApiClient, DomSdkEnvironment, IncidentClient};
use crate::state::AppState;
use crate::utils::constants::APP_ROOT_ID;
use crate::utils::spawn::browser_spawner;
use crate::viewmodels::{BootstrapViewModel, MapSettings, MapViewModel, ModalViewModel, WeatherViewModel};
use crate::views::{render_app, ModalCallbacks};

type WebModal = ModalViewModel<ApiClient, DomSdkEnvironment, TomTomBackend, IncidentClient>;

/// Aplicación principal
pub struct App {
    state: AppState,
    modal: Rc<WebModal>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        if CONFIG.tomtom_key().is_empty() {
            log::warn!("⚠️ [APP] TOMTOM_API_KEY vacío: el mapa no cargará tiles");
        }

        let state = AppState::new();
        let spawner = browser_spawner();
        let modal = ModalViewModel::new(
            state.clone(),
            WeatherViewModel::new(state.query.clone(), ApiClient::new()),
            BootstrapViewModel::new(state.readiness.clone(), DomSdkEnvironment::new()),
            MapViewModel::new(
                TomTomBackend::new(),
                IncidentClient::new(CONFIG.tomtom_key()),
                spawner.clone(),
                MapSettings::from_config(&CONFIG),
            ),
            spawner,
        );

        Ok(Self { state, modal, root })
    }

    fn callbacks(&self) -> ModalCallbacks {
        let on_close = {
            let modal = self.modal.clone();
            Rc::new(move || modal.close()) as Rc<dyn Fn()>
        };
        let on_city_input = {
            let modal = self.modal.clone();
            Rc::new(move |text: String| modal.set_city_text(&text)) as Rc<dyn Fn(String)>
        };
        let on_submit = {
            let modal = self.modal.clone();
            Rc::new(move |text: String| modal.submit(&text)) as Rc<dyn Fn(String)>
        };
        let on_dismiss_error = {
            let modal = self.modal.clone();
            Rc::new(move || modal.dismiss_error()) as Rc<dyn Fn()>
        };
        ModalCallbacks {
            on_close,
            on_city_input,
            on_submit,
            on_dismiss_error,
        }
    }

    /// Render inicial + suscripción a cambios
    pub fn render(&self) -> Result<(), JsValue> {
        let on_open = {
            let modal = self.modal.clone();
            Rc::new(move || modal.open()) as Rc<dyn Fn()>
        };
        render_app(&self.root, on_open, &self.callbacks())?;
        apply_all(&self.state)?;

        let state = self.state.clone();
        self.state.subscribe_to_changes(move |update| {
            if let Err(e) = apply_update(&state, update) {
                log::error!("❌ [APP] Actualización {:?} fallida: {}", update, describe_js(&e));
            }
        });

        log::info!("✅ [APP] Renderizado en #{}", APP_ROOT_ID);
        Ok(())
    }

    pub fn open_modal(&self) {
        self.modal.open();
    }

    pub fn close_modal(&self) {
        self.modal.close();
    }
}
