// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod query_state;
pub mod map_state;
pub mod modal_state;
pub mod app_state;

pub use reactivity::*;
pub use query_state::*;
pub use map_state::*;
pub use modal_state::*;
pub use app_state::*;
