//! # Kartoteka
//!
//! Kartoteka reads one line describing a person, validates its six fields and appends
//! a normalized line to a plain-text file named after the surname.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Prompt, stdin, stdout/stderr, exit codes, logging setup  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/ingest.rs)               │
//! │  - Fail-fast validation via parse.rs                        │
//! │  - Returns Result<CmdResult, IngestError>                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward writes to stdout/stderr or calls `std::process::exit`.
//! A rejected line never reaches the store, so either exactly one line is appended or
//! nothing is written at all.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by the binary
//! - [`commands`]: The ingestion flow and its result types
//! - [`parse`]: Tokenization and per-field validation
//! - [`model`]: `PersonRecord`, `Gender`, `Field`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration loaded from the output directory
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod store;
