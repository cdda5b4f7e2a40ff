//! SQLite-backed persistence.

pub mod draft;
pub mod pool;

pub use draft::SqliteDraftStore;
pub use pool::DatabasePool;
