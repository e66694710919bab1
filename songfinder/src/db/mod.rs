//! Song store implementations
//!
//! - [`SqliteSongStore`]: JSON documents in the SQLite `songs` table
//! - [`MemorySongStore`]: in-memory fake for tests and fixtures

mod memory;
mod sqlite;

pub use memory::MemorySongStore;
pub use sqlite::SqliteSongStore;
