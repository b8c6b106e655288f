// ============================================================================
// BOOTSTRAP VIEWMODEL - Carga perezosa del SDK de TomTom
// ============================================================================
// CSS → maps-web.min.js → services-web.min.js, en ese orden y esperando cada
// script. La disponibilidad es monótona: una vez lista no se vuelve a cargar.
// ============================================================================

use std::cell::Cell;

use crate::error::SdkError;
use crate::services::SdkEnvironment;
use crate::state::{MapReadiness, ReactiveState};
use crate::utils::constants::{TOMTOM_MAPS_CSS_URL, TOMTOM_MAPS_JS_URL, TOMTOM_SERVICES_JS_URL};

#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    /// Ya estaba listo (o el SDK ya estaba en la página)
    AlreadyReady,
    /// Assets cargados en esta llamada
    Loaded,
    /// Otra llamada está cargando; esta no hace nada
    InFlight,
    Failed(SdkError),
}

impl BootstrapOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, BootstrapOutcome::AlreadyReady | BootstrapOutcome::Loaded)
    }
}

pub struct BootstrapViewModel<E: SdkEnvironment> {
    env: E,
    readiness: ReactiveState<MapReadiness>,
    in_flight: Cell<bool>,
}

impl<E: SdkEnvironment> BootstrapViewModel<E> {
    pub fn new(readiness: ReactiveState<MapReadiness>, env: E) -> Self {
        Self {
            env,
            readiness,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.with(MapReadiness::is_ready)
    }

    /// Síncrono: si el SDK ya está en la página se marca listo sin efectos
    pub fn adopt_present_sdk(&self) -> bool {
        if self.is_ready() {
            return true;
        }
        if !self.env.sdk_present() {
            return false;
        }
        log::info!("✅ [SDK] TomTom ya presente en la página");
        self.readiness.update(MapReadiness::mark_ready);
        true
    }

    pub async fn ensure_sdk_loaded(&self) -> BootstrapOutcome {
        if self.adopt_present_sdk() {
            return BootstrapOutcome::AlreadyReady;
        }
        if self.in_flight.get() {
            log::debug!("⏳ [SDK] Carga ya en curso");
            return BootstrapOutcome::InFlight;
        }

        self.in_flight.set(true);
        log::info!("📦 [SDK] Cargando TomTom Maps SDK");
        let loaded = self.load_assets().await;
        self.in_flight.set(false);

        match loaded {
            Ok(()) => {
                self.readiness.update(MapReadiness::mark_ready);
                log::info!("✅ [SDK] SDK listo");
                BootstrapOutcome::Loaded
            }
            Err(error) => {
                log::error!("❌ [SDK] {}", error);
                BootstrapOutcome::Failed(error)
            }
        }
    }

    async fn load_assets(&self) -> Result<(), SdkError> {
        self.env.inject_stylesheet(TOMTOM_MAPS_CSS_URL)?;
        self.env.load_script(TOMTOM_MAPS_JS_URL).await?;
        self.env.load_script(TOMTOM_SERVICES_JS_URL).await
    }
}
