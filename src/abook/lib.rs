//! # Abook Architecture
//!
//! Abook is an interactive address book: one command per input line, a
//! name-ordered contact store, and a JSON file that is rewritten after every
//! change.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Flags, config, logging, exit codes                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs, render.rs)                            │
//! │  - Prompt / read / confirm loop over any BufRead + Write    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - prepare → confirmation → execute, persistence of changes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Tokenizing, per-command parse/confirm/run, registry      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore, StorageBackend (FsBackend, MemBackend)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or reads stdin. The session
//! only knows about the reader and writer it was handed, so whole
//! conversations can be tested against a `Cursor` and a `Vec<u8>`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI drives
//! - [`commands`]: command kinds, parsing, and business logic
//! - [`store`]: contact store and storage backends
//! - [`session`]: the interactive loop
//! - [`render`]: result formatting
//! - [`model`]: the `Contact` record
//! - [`config`]: user configuration
//! - [`logging`]: tracing setup
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
pub mod session;
pub mod store;
