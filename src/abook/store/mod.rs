//! # Storage Layer
//!
//! Two halves with a narrow seam between them:
//!
//! - [`ContactStore`]: the in-memory, name-ordered book. Everything the
//!   commands do happens here.
//! - [`StorageBackend`]: raw bytes in and out. The store serializes itself
//!   with [`ContactStore::save_to`] and the backend writes the result.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, a single JSON file written
//!   atomically (tmp file + rename)
//! - [`mem_backend::MemBackend`]: in-memory for tests, counts saves
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Alan", "phone": "555-0100", "email": "alan@x.com" },
//!   { "name": "Alice", "phone": "555-0101", "email": "alice@x.com" }
//! ]
//! ```
//!
//! Array order is ignored on load and is name order on save.

pub mod backend;
pub mod book;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use book::ContactStore;
