//! # Emprec Architecture
//!
//! Emprec keeps employee records (id, name, age, department) in a single JSON file
//! and is driven by an interactive numbered menu. The library holds everything but
//! the terminal: the binary's `cli/` module is a thin client on top of [`api`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, rendering, exit codes                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses operator-typed ids, dispatches to commands        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, list, view, update, delete                          │
//! │  - load the whole collection, mutate, save it once          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids
//!
//! A new employee gets `max(existing ids) + 1`, or 1 when the collection is empty.
//! Ids are never renumbered.
//!
//! ## Failure policy
//!
//! - A corrupt or non-array data file loads as an empty collection (logged at `warn`).
//! - Operator mistakes and unknown ids are recoverable [`error::EmprecError`]s.
//! - I/O failures propagate and end the run.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Employee` and operator input types
//! - [`config`]: Configuration (data file location)
//! - [`logging`]: tracing setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
