//! reqwest client for the CoinVest PHP backend.
//!
//! Every endpoint answers a JSON envelope `{ "success": bool, "message"?: string, ... }`
//! with the payload under an endpoint-specific key (`user`, `data`).

mod client;
mod endpoints;
mod envelope;
mod ports;

pub use client::HttpBackend;
pub use endpoints::*;
