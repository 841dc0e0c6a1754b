//! Core services composed over ports.

mod session_service;

pub use session_service::{
    ARCHITECTURE_FALLBACK, PYTHON_VERSION_SCRIPT, SessionService, UNKNOWN,
};
