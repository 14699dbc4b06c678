pub mod config_service;
pub mod history_exporter;
pub mod paths;
pub mod secret_service;

pub use crate::config_service::ConfigService;
pub use crate::history_exporter::{DEFAULT_EXPORT_FILE_NAME, HistoryExporter};
pub use crate::paths::MoodlensPaths;
pub use crate::secret_service::SecretServiceImpl;
