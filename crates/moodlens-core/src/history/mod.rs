//! Session history: immutable entries, the append-only store, and its CSV form.

mod csv_codec;
mod model;
mod store;

pub use csv_codec::{CSV_HEADER, parse_csv, to_csv};
pub use model::{HistoryEntry, TIMESTAMP_FORMAT};
pub use store::HistoryStore;
