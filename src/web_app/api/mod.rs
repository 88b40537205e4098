// web_app/api/mod.rs - Outbound client for the remote Product API
//
// This module holds the reqwest-based client that the server functions
// use to talk to the external REST service. SSR only; the WASM build
// never links an HTTP client of its own.

#[cfg(feature = "ssr")]
pub mod client;

#[cfg(feature = "ssr")]
pub mod rest;

#[cfg(feature = "ssr")]
pub use rest::{ApiError, ProductApi};
