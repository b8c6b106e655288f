// ============================================================================
// SPAWN - Ejecutor de futures inyectable
// ============================================================================
// En el navegador delega en wasm_bindgen_futures::spawn_local; los tests
// inyectan un LocalPool para controlar cuándo avanza cada future.
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

pub type LocalBoxFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Lanza un future en el hilo actual
pub type Spawner = Rc<dyn Fn(LocalBoxFuture)>;

pub fn browser_spawner() -> Spawner {
    Rc::new(|future: LocalBoxFuture| wasm_bindgen_futures::spawn_local(future))
}

/// Envolver un future en Box::pin y lanzarlo
pub fn spawn_with<F>(spawner: &Spawner, future: F)
where
    F: Future<Output = ()> + 'static,
{
    spawner(Box::pin(future));
}
