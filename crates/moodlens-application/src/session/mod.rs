//! Session application services.

mod factory;
mod model;
mod report;

pub use factory::SessionFactory;
pub use model::{Session, SessionOptions};
pub use report::DetectionReport;
