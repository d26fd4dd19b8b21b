//! healthd - Health Record Demo Server
//!
//! Core library for HTTP handling, static assets and the record store.

pub mod assets;
pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod store;
