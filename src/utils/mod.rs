// Utils compartidos

pub mod constants;
pub mod format;
pub mod spawn;
pub mod tomtom_ffi;

pub use constants::*;
pub use format::*;
pub use spawn::*;
