//! Quotify core
//!
//! Quote retrieval with offline/local fallback, durable favorites,
//! and sharing helpers. The terminal front end lives in `quotify-cli`.

pub mod config;
pub mod data;
pub mod error;
pub mod net;
pub mod share;
pub mod source;
