// ============================================================================
// MAP VIEWMODEL - Sincronización del mapa de tráfico
// ============================================================================
// Como mucho UNA instancia viva. Cada instancia tiene un número de generación;
// los callbacks (load, incidentes) de una generación ya destruida se ignoran.
// Los errores del mapa solo se registran en logs.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::AppConfig;
use crate::error::MapError;
use crate::maps::{IncidentMarker, MapBackend, MapOptions, TrafficFlowLayer};
use crate::models::{Coordinates, WeatherResult};
use crate::services::IncidentApi;
use crate::utils::constants::{
    INCIDENT_BBOX_DELTA, INCIDENT_MARKER_COLOR, INCIDENT_POPUP_OFFSET, INCIDENT_POPUP_TITLE,
    MAP_CONTAINER_ID, MAP_STYLE,
};
use crate::utils::spawn::{spawn_with, Spawner};

/// Parámetros fijos del mapa
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub api_key: String,
    pub fallback_center: Coordinates,
    pub zoom: f64,
}

impl MapSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.tomtom_key().to_string(),
            fallback_center: config.map_config.fallback_center(),
            zoom: config.map_config.default_zoom,
        }
    }
}

/// Resultado de un `sync`
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    NotReady,
    Hidden,
    Unchanged,
    Rebuilt(Coordinates),
    Failed(MapError),
}

struct LiveMap<H> {
    handle: H,
    center: Coordinates,
    generation: u64,
}

struct MapInner<B: MapBackend, I: IncidentApi> {
    backend: B,
    incidents: I,
    spawner: Spawner,
    settings: MapSettings,
    live: RefCell<Option<LiveMap<B::Handle>>>,
    generation: Cell<u64>,
}

pub struct MapViewModel<B: MapBackend, I: IncidentApi> {
    inner: Rc<MapInner<B, I>>,
}

impl<B: MapBackend, I: IncidentApi> Clone for MapViewModel<B, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<B, I> MapViewModel<B, I>
where
    B: MapBackend + 'static,
    I: IncidentApi + 'static,
{
    pub fn new(backend: B, incidents: I, spawner: Spawner, settings: MapSettings) -> Self {
        Self {
            inner: Rc::new(MapInner {
                backend,
                incidents,
                spawner,
                settings,
                live: RefCell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    /// Centro del resultado de clima, o el de reserva
    pub fn select_coordinates(&self, result: Option<&WeatherResult>) -> Coordinates {
        result
            .map(|r| r.coordinates)
            .unwrap_or(self.inner.settings.fallback_center)
    }

    pub fn live_center(&self) -> Option<Coordinates> {
        self.inner.live.borrow().as_ref().map(|live| live.center)
    }

    pub fn is_live(&self) -> bool {
        self.inner.live.borrow().is_some()
    }

    /// Re-sincronizar (apertura, SDK listo): mismo centro con mapa vivo no hace nada
    pub fn sync(&self, ready: bool, visible: bool, result: Option<&WeatherResult>) -> SyncOutcome {
        self.sync_with(ready, visible, result, false)
    }

    /// Tras una consulta resuelta con éxito: siempre reconstruye, aunque el centro
    /// no cambie, para refrescar la capa de tráfico y los incidentes
    pub fn refresh(&self, ready: bool, visible: bool, result: Option<&WeatherResult>) -> SyncOutcome {
        self.sync_with(ready, visible, result, true)
    }

    fn sync_with(
        &self,
        ready: bool,
        visible: bool,
        result: Option<&WeatherResult>,
        force: bool,
    ) -> SyncOutcome {
        if !ready {
            return SyncOutcome::NotReady;
        }
        if !visible {
            return SyncOutcome::Hidden;
        }

        let center = self.select_coordinates(result);
        if !force && self.live_center() == Some(center) {
            return SyncOutcome::Unchanged;
        }

        match self.inner.rebuild(center) {
            Ok(()) => SyncOutcome::Rebuilt(center),
            Err(error) => {
                log::error!("❌ [MAP] No se pudo construir el mapa: {}", error);
                SyncOutcome::Failed(error)
            }
        }
    }

    /// Destruir la instancia viva (cierre del modal)
    pub fn dispose(&self) {
        self.inner.dispose();
    }
}

impl<B, I> MapInner<B, I>
where
    B: MapBackend + 'static,
    I: IncidentApi + 'static,
{
    fn dispose(&self) {
        let live = self.live.borrow_mut().take();
        if let Some(live) = live {
            log::info!("🧹 [MAP] Destruyendo mapa (generación {})", live.generation);
            self.backend.remove(&live.handle);
        }
    }

    fn handle_for(&self, generation: u64) -> Option<(B::Handle, Coordinates)> {
        self.live
            .borrow()
            .as_ref()
            .filter(|live| live.generation == generation)
            .map(|live| (live.handle.clone(), live.center))
    }

    fn rebuild(self: &Rc<Self>, center: Coordinates) -> Result<(), MapError> {
        self.dispose();

        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let options = MapOptions {
            container_id: MAP_CONTAINER_ID.to_string(),
            api_key: self.settings.api_key.clone(),
            center,
            zoom: self.settings.zoom,
            style: MAP_STYLE.to_string(),
        };
        let handle = self.backend.create_map(&options)?;

        if let Err(error) = self.backend.add_controls(&handle) {
            log::warn!("⚠️ [MAP] Controles no añadidos: {}", error);
        }

        *self.live.borrow_mut() = Some(LiveMap {
            handle: handle.clone(),
            center,
            generation,
        });

        let weak: Weak<Self> = Rc::downgrade(self);
        self.backend.on_load(
            &handle,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.on_map_loaded(generation);
                }
            }),
        );

        log::info!(
            "🗺️ [MAP] Mapa generación {} en ({}, {})",
            generation, center.lat, center.lon
        );
        Ok(())
    }

    fn on_map_loaded(self: &Rc<Self>, generation: u64) {
        let Some((handle, center)) = self.handle_for(generation) else {
            log::debug!("🗑️ [MAP] load de generación {} ignorado", generation);
            return;
        };

        let layer = TrafficFlowLayer::for_api_key(&self.settings.api_key);
        match self.backend.add_traffic_flow(&handle, &layer) {
            Ok(()) => log::info!("🚦 [MAP] Capa de flujo de tráfico añadida"),
            Err(error) => log::warn!("⚠️ [MAP] Capa de tráfico: {}", error),
        }

        let inner = self.clone();
        spawn_with(&self.spawner, async move {
            inner.load_incidents(generation, center).await;
        });
    }

    async fn load_incidents(&self, generation: u64, center: Coordinates) -> usize {
        let bbox = center.bounding_box(INCIDENT_BBOX_DELTA);
        let incidents = match self.incidents.fetch_incidents(&bbox).await {
            Ok(incidents) => incidents,
            Err(error) => {
                log::warn!("⚠️ [MAP] {}", error);
                return 0;
            }
        };

        let Some((handle, _)) = self.handle_for(generation) else {
            log::debug!("🗑️ [MAP] Incidentes de generación {} descartados", generation);
            return 0;
        };

        let mut added = 0;
        for incident in &incidents {
            let Some(position) = incident.marker_position() else {
                continue;
            };
            let marker = IncidentMarker {
                position,
                title: INCIDENT_POPUP_TITLE.to_string(),
                description: incident.description().to_string(),
                color: INCIDENT_MARKER_COLOR.to_string(),
                popup_offset: INCIDENT_POPUP_OFFSET,
            };
            match self.backend.add_incident_marker(&handle, &marker) {
                Ok(()) => added += 1,
                Err(error) => log::warn!("⚠️ [MAP] Marcador no añadido: {}", error),
            }
        }
        log::info!("📍 [MAP] {} de {} incidentes con marcador", added, incidents.len());
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather::fixtures::london;
    use crate::viewmodels::test_support::{pool_spawner, FakeIncidentApi, FakeMapBackend};
    use futures::executor::LocalPool;

    const INCIDENTS: &str = r#"{
        "incidents": [
            { "type": "Feature",
              "geometry": { "type": "Point", "coordinates": [-0.11, 51.51] },
              "properties": { "iconCategory": 6, "events": [{ "description": "Stationary traffic", "code": 108 }] } },
            { "type": "Feature",
              "geometry": { "type": "LineString", "coordinates": [[-0.13, 51.49], [-0.14, 51.48]] },
              "properties": { "iconCategory": 8 } },
            { "type": "Feature",
              "geometry": { "type": "Polygon", "coordinates": [[[-0.1, 51.5]]] },
              "properties": {} },
            { "type": "Feature",
              "geometry": { "type": "LineString", "coordinates": [] },
              "properties": {} }
        ]
    }"#;

    fn settings() -> MapSettings {
        MapSettings {
            api_key: "test-key".into(),
            fallback_center: Coordinates::new(23.2599, 77.4126),
            zoom: 12.0,
        }
    }

    fn viewmodel(
        pool: &LocalPool,
        incidents: FakeIncidentApi,
    ) -> (MapViewModel<FakeMapBackend, FakeIncidentApi>, FakeMapBackend) {
        let backend = FakeMapBackend::default();
        let vm = MapViewModel::new(backend.clone(), incidents, pool_spawner(pool), settings());
        (vm, backend)
    }

    #[test]
    fn test_settings_from_default_config() {
        let mut config = AppConfig::default();
        config.tomtom_api_key = "abc".into();
        let settings = MapSettings::from_config(&config);
        assert_eq!(settings.api_key, "abc");
        assert_eq!(settings.zoom, 12.0);
        assert_eq!(settings.fallback_center, Coordinates::new(23.2599, 77.4126));
    }

    #[test]
    fn test_select_coordinates_prefers_weather_result() {
        let pool = LocalPool::new();
        let (vm, _) = viewmodel(&pool, FakeIncidentApi::default());
        assert_eq!(vm.select_coordinates(None), Coordinates::new(23.2599, 77.4126));
        assert_eq!(vm.select_coordinates(Some(&london())), Coordinates::new(51.5, -0.12));
    }

    #[test]
    fn test_sync_requires_ready_and_visible() {
        let pool = LocalPool::new();
        let (vm, backend) = viewmodel(&pool, FakeIncidentApi::default());
        assert_eq!(vm.sync(false, true, None), SyncOutcome::NotReady);
        assert_eq!(vm.sync(true, false, None), SyncOutcome::Hidden);
        assert!(backend.log.borrow().created.is_empty());
    }

    #[test]
    fn test_map_options_and_controls() {
        let pool = LocalPool::new();
        let (vm, backend) = viewmodel(&pool, FakeIncidentApi::default());
        let london = london();
        assert_eq!(
            vm.sync(true, true, Some(&london)),
            SyncOutcome::Rebuilt(Coordinates::new(51.5, -0.12))
        );

        let log = backend.log.borrow();
        let (id, options) = &log.created[0];
        assert_eq!(options.container_id, "traffic-map");
        assert_eq!(options.style, "main");
        assert_eq!(options.zoom, 12.0);
        assert_eq!(options.api_key, "test-key");
        assert_eq!(log.controls, vec![*id]);
    }

    #[test]
    fn test_unchanged_center_is_noop() {
        let pool = LocalPool::new();
        let (vm, backend) = viewmodel(&pool, FakeIncidentApi::default());
        vm.sync(true, true, None);
        assert_eq!(vm.sync(true, true, None), SyncOutcome::Unchanged);
        assert_eq!(backend.log.borrow().created.len(), 1);
    }

    #[test]
    fn test_refresh_rebuilds_same_center() {
        let mut pool = LocalPool::new();
        let incidents = FakeIncidentApi::with_json(INCIDENTS);
        let (vm, backend) = viewmodel(&pool, incidents.clone());
        let london = london();
        vm.sync(true, true, Some(&london));
        backend.fire_load(1);
        pool.run_until_stalled();

        assert_eq!(vm.sync(true, true, Some(&london)), SyncOutcome::Unchanged);
        assert_eq!(
            vm.refresh(true, true, Some(&london)),
            SyncOutcome::Rebuilt(Coordinates::new(51.5, -0.12))
        );
        backend.fire_load(2);
        pool.run_until_stalled();

        let log = backend.log.borrow();
        assert_eq!(log.created.len(), 2);
        assert_eq!(log.removed, vec![1]);
        assert_eq!(log.traffic_layers, vec![1, 2]);
        assert_eq!(incidents.queries.borrow().len(), 2);
    }

    #[test]
    fn test_refresh_still_requires_ready_and_visible() {
        let pool = LocalPool::new();
        let (vm, backend) = viewmodel(&pool, FakeIncidentApi::default());
        assert_eq!(vm.refresh(false, true, None), SyncOutcome::NotReady);
        assert_eq!(vm.refresh(true, false, None), SyncOutcome::Hidden);
        assert!(backend.log.borrow().created.is_empty());
    }

    #[test]
    fn test_at_most_one_live_instance_across_rebuilds() {
        let pool = LocalPool::new();
        let (vm, backend) = viewmodel(&pool, FakeIncidentApi::default());
        let mut result = london();
        for step in 0..5 {
            result.coordinates = Coordinates::new(51.5 + step as f64, -0.12);
            vm.sync(true, true, Some(&result));
            assert_eq!(backend.log.borrow().live_count(), 1);
        }
        assert_eq!(backend.log.borrow().removed, vec![1, 2, 3, 4]);

        vm.dispose();
        assert_eq!(backend.log.borrow().live_count(), 0);
        assert!(!vm.is_live());
    }

    #[test]
    fn test_load_adds_traffic_layer_and_resolvable_markers() {
        let mut pool = LocalPool::new();
        let incidents = FakeIncidentApi::with_json(INCIDENTS);
        let (vm, backend) = viewmodel(&pool, incidents.clone());
        vm.sync(true, true, Some(&london()));

        backend.fire_load(1);
        pool.run_until_stalled();

        let log = backend.log.borrow();
        assert_eq!(log.traffic_layers, vec![1]);
        assert_eq!(log.markers.len(), 2);

        let (_, first) = &log.markers[0];
        assert_eq!(first.position, Coordinates::new(51.51, -0.11));
        assert_eq!(first.title, "Traffic Incident");
        assert_eq!(first.description, "Stationary traffic");
        assert_eq!(first.color, "#ff0000");
        assert_eq!(first.popup_offset, 35);

        let (_, second) = &log.markers[1];
        assert_eq!(second.position, Coordinates::new(51.49, -0.13));
        assert_eq!(second.description, "Traffic incident reported");

        let queried = incidents.queries.borrow()[0];
        assert_eq!(queried, Coordinates::new(51.5, -0.12).bounding_box(0.1));
    }

    #[test]
    fn test_stale_load_callback_is_ignored() {
        let mut pool = LocalPool::new();
        let incidents = FakeIncidentApi::with_json(INCIDENTS);
        let (vm, backend) = viewmodel(&pool, incidents.clone());
        vm.sync(true, true, None);
        vm.sync(true, true, Some(&london()));

        backend.fire_load(1);
        pool.run_until_stalled();
        assert!(backend.log.borrow().traffic_layers.is_empty());
        assert!(incidents.queries.borrow().is_empty());

        backend.fire_load(2);
        pool.run_until_stalled();
        assert_eq!(backend.log.borrow().traffic_layers, vec![2]);
    }

    #[test]
    fn test_incidents_for_disposed_map_are_dropped() {
        let mut pool = LocalPool::new();
        let (vm, backend) = viewmodel(&pool, FakeIncidentApi::with_json(INCIDENTS));
        vm.sync(true, true, None);
        backend.fire_load(1);
        // el fetch de incidentes sigue encolado cuando se cierra el modal
        vm.dispose();
        pool.run_until_stalled();
        assert!(backend.log.borrow().markers.is_empty());
    }

    #[test]
    fn test_incident_failure_is_swallowed() {
        let mut pool = LocalPool::new();
        let (vm, backend) = viewmodel(&pool, FakeIncidentApi::failing());
        vm.sync(true, true, None);
        backend.fire_load(1);
        pool.run_until_stalled();

        let log = backend.log.borrow();
        assert_eq!(log.traffic_layers, vec![1]);
        assert!(log.markers.is_empty());
        assert!(vm.is_live());
    }

    #[test]
    fn test_construction_failure_leaves_no_instance() {
        let pool = LocalPool::new();
        let (vm, backend) = viewmodel(&pool, FakeIncidentApi::default());
        backend.fail_create.set(true);
        assert!(matches!(vm.sync(true, true, None), SyncOutcome::Failed(MapError::Sdk(_))));
        assert!(!vm.is_live());

        // el siguiente sync vuelve a intentarlo
        backend.fail_create.set(false);
        assert!(matches!(vm.sync(true, true, None), SyncOutcome::Rebuilt(_)));
    }
}
