//! Networking modules for the slides HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side fetch and `types` defines the shared wire
//! schema.

pub mod api;
pub mod types;
