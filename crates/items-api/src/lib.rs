//! Items API — library crate for the items REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `items-e2e-tests`) can access `AppState`, `build_router` and the
//! `ItemStore` backends.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod shutdown;
pub mod state;
pub mod store;
