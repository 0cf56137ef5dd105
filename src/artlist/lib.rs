//! # Artlist Architecture
//!
//! Artlist keeps a flat-file list of music artists (`[id, name]` pairs in
//! `artists.json`) and, after every change, rewrites a copy-ready report
//! (`output.txt`) with the artists sorted by name and grouped by first letter.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints messages, sets the exit code    │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / remove as pure list mutations                      │
//! │  - publish: sort, group, render, write report, write list   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ArtistStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The report pipeline itself lives in [`report`] and is pure.
//!
//! ## One Invocation
//!
//! Every run reads the whole list, applies exactly one add or remove, then
//! writes the report and the list in full. A failed validation, duplicate or
//! missing match aborts before anything is written. There is no locking:
//! two concurrent runs race and the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade, entry point for all operations
//! - [`commands`]: add, remove and the shared publish step
//! - [`report`]: sort, group and render
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Entry`] record
//! - [`config`]: File names inside the data directory
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod store;
