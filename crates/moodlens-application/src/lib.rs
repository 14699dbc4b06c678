//! Application layer for moodlens.
//!
//! Coordinates the domain pipeline, classifier backends, and infrastructure
//! services into per-user sessions.

pub mod session;
pub mod session_usecase;

pub use session::{DetectionReport, Session, SessionFactory, SessionOptions};
pub use session_usecase::SessionUseCase;
