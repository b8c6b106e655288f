// Fakes compartidos por los tests de los viewmodels

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use crate::error::{MapError, QueryError, SdkError};
use crate::maps::{IncidentMarker, MapBackend, MapOptions, TrafficFlowLayer};
use crate::models::{BoundingBox, Incident, IncidentResponse, WeatherResult};
use crate::services::{IncidentApi, SdkEnvironment, WeatherApi};
use crate::utils::spawn::{LocalBoxFuture, Spawner};

/// Spawner que encola en un LocalPool (avanza con run_until_stalled)
pub fn pool_spawner(pool: &LocalPool) -> Spawner {
    let spawner = pool.spawner();
    Rc::new(move |future: LocalBoxFuture| {
        spawner.spawn_local(future).unwrap();
    })
}

// ----------------------------------------------------------------------------
// Clima
// ----------------------------------------------------------------------------

pub type WeatherReply = Result<WeatherResult, QueryError>;

enum Scripted {
    Now(WeatherReply),
    Later(oneshot::Receiver<WeatherReply>),
}

#[derive(Clone, Default)]
pub struct FakeWeatherApi {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub aborts: Rc<Cell<usize>>,
    script: Rc<RefCell<VecDeque<Scripted>>>,
}

impl FakeWeatherApi {
    pub fn reply(&self, reply: WeatherReply) {
        self.script.borrow_mut().push_back(Scripted::Now(reply));
    }

    /// Respuesta diferida: se entrega con el Sender devuelto
    pub fn reply_later(&self) -> oneshot::Sender<WeatherReply> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Later(rx));
        tx
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl WeatherApi for FakeWeatherApi {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResult, QueryError> {
        self.calls.borrow_mut().push(city.to_string());
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Now(reply)) => reply,
            Some(Scripted::Later(rx)) => rx.await.unwrap_or(Err(QueryError::Stale)),
            None => Err(QueryError::Network("no scripted reply".into())),
        }
    }

    fn abort_pending(&self) {
        self.aborts.set(self.aborts.get() + 1);
    }
}

// ----------------------------------------------------------------------------
// SDK
// ----------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct FakeSdkEnvironment {
    pub present: Rc<Cell<bool>>,
    pub effects: Rc<RefCell<Vec<String>>>,
    pub failing_url: Rc<RefCell<Option<String>>>,
    gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
}

impl FakeSdkEnvironment {
    pub fn present() -> Self {
        let env = Self::default();
        env.present.set(true);
        env
    }

    pub fn fail_on(&self, url: &str) {
        *self.failing_url.borrow_mut() = Some(url.to_string());
    }

    /// El siguiente script queda bloqueado hasta enviar por el Sender
    pub fn hold_next_script(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn effects(&self) -> Vec<String> {
        self.effects.borrow().clone()
    }

    fn check(&self, url: &str) -> Result<(), SdkError> {
        match self.failing_url.borrow().as_deref() {
            Some(failing) if failing == url => Err(SdkError::AssetLoad {
                url: url.to_string(),
                reason: "404".into(),
            }),
            _ => Ok(()),
        }
    }
}

impl SdkEnvironment for FakeSdkEnvironment {
    fn sdk_present(&self) -> bool {
        self.present.get()
    }

    fn inject_stylesheet(&self, href: &str) -> Result<(), SdkError> {
        self.effects.borrow_mut().push(format!("css:{}", href));
        self.check(href)
    }

    async fn load_script(&self, src: &str) -> Result<(), SdkError> {
        self.effects.borrow_mut().push(format!("js:{}", src));
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.check(src)
    }
}

// ----------------------------------------------------------------------------
// Mapa
// ----------------------------------------------------------------------------

#[derive(Default)]
pub struct BackendLog {
    pub created: Vec<(u64, MapOptions)>,
    pub removed: Vec<u64>,
    pub controls: Vec<u64>,
    pub traffic_layers: Vec<u64>,
    pub markers: Vec<(u64, IncidentMarker)>,
}

impl BackendLog {
    pub fn live_count(&self) -> usize {
        self.created.len() - self.removed.len()
    }
}

#[derive(Clone, Default)]
pub struct FakeMapBackend {
    pub log: Rc<RefCell<BackendLog>>,
    pub fail_create: Rc<Cell<bool>>,
    next_id: Rc<Cell<u64>>,
    load_callbacks: Rc<RefCell<HashMap<u64, Box<dyn FnOnce()>>>>,
}

impl FakeMapBackend {
    /// Disparar el evento `load` de una instancia
    pub fn fire_load(&self, id: u64) {
        let callback = self.load_callbacks.borrow_mut().remove(&id);
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl MapBackend for FakeMapBackend {
    type Handle = u64;

    fn create_map(&self, options: &MapOptions) -> Result<u64, MapError> {
        if self.fail_create.get() {
            return Err(MapError::Sdk("tt.map threw".into()));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.log.borrow_mut().created.push((id, options.clone()));
        Ok(id)
    }

    fn add_controls(&self, map: &u64) -> Result<(), MapError> {
        self.log.borrow_mut().controls.push(*map);
        Ok(())
    }

    fn on_load(&self, map: &u64, callback: Box<dyn FnOnce()>) {
        self.load_callbacks.borrow_mut().insert(*map, callback);
    }

    fn add_traffic_flow(&self, map: &u64, _layer: &TrafficFlowLayer) -> Result<(), MapError> {
        self.log.borrow_mut().traffic_layers.push(*map);
        Ok(())
    }

    fn add_incident_marker(&self, map: &u64, marker: &IncidentMarker) -> Result<(), MapError> {
        self.log.borrow_mut().markers.push((*map, marker.clone()));
        Ok(())
    }

    fn remove(&self, map: &u64) {
        self.log.borrow_mut().removed.push(*map);
    }
}

#[derive(Clone, Default)]
pub struct FakeIncidentApi {
    pub queries: Rc<RefCell<Vec<BoundingBox>>>,
    reply: Rc<RefCell<Option<Result<Vec<Incident>, MapError>>>>,
}

impl FakeIncidentApi {
    pub fn with_json(body: &str) -> Self {
        let api = Self::default();
        let parsed: IncidentResponse = serde_json::from_str(body).unwrap();
        *api.reply.borrow_mut() = Some(Ok(parsed.incidents));
        api
    }

    pub fn failing() -> Self {
        let api = Self::default();
        *api.reply.borrow_mut() = Some(Err(MapError::Incident("HTTP 403: Forbidden".into())));
        api
    }
}

impl IncidentApi for FakeIncidentApi {
    async fn fetch_incidents(&self, bbox: &BoundingBox) -> Result<Vec<Incident>, MapError> {
        self.queries.borrow_mut().push(*bbox);
        self.reply.borrow().clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}
