//! Waypath Core Library
//!
//! Core domain logic for waypath: location and route records, the SQLite-backed
//! store, and the in-memory weighted graph used for shortest-path queries.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod id;
pub mod logging;
pub mod model;
pub mod records;
pub mod store;
