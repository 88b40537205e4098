// web_app/api/client.rs - Global Product API client setup
//
// This module provides client registration for server functions.

use std::sync::Mutex;
use std::sync::OnceLock;

use super::rest::ProductApi;

static API: OnceLock<ProductApi> = OnceLock::new();
static TEST_API_OVERRIDE: Mutex<Option<ProductApi>> = Mutex::new(None);

/// Initialize the global API client
pub fn init_api(api: ProductApi) {
    tracing::info!("Initializing global Product API client");
    if API.set(api).is_err() {
        tracing::warn!("Product API client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_api(api: ProductApi) {
    let mut guard = TEST_API_OVERRIDE.lock().unwrap();
    *guard = Some(api);
}

/// Get the global API client
pub fn get_api() -> Option<ProductApi> {
    // Check for test override first
    {
        let guard = TEST_API_OVERRIDE.lock().unwrap();
        if let Some(ref api) = *guard {
            return Some(api.clone());
        }
    }

    let api = API.get().cloned();
    if api.is_none() {
        tracing::warn!("Global Product API client is not initialized");
    }
    api
}
