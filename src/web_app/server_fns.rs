// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn api() -> Result<crate::web_app::api::ProductApi, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;

    use crate::web_app::api::client;
    use crate::web_app::api::ProductApi;

    // First try to get from context (for testing or if manually set)
    if let Some(api) = use_context::<ProductApi>() {
        return Ok(api);
    }

    // Try the global client (most reliable fallback)
    if let Some(api) = client::get_api() {
        return Ok(api);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(api_data) = req.app_data::<Data<ProductApi>>() {
                return Ok(api_data.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Product API client not available"))
}

/// Fetch one page of products from the remote API
#[server(ListProducts, "/api")]
pub async fn list_products(page: u32, page_size: u32) -> Result<ProductPage, ServerFnError> {
    tracing::info!("List request: page={}, page_size={}", page, page_size);

    let api = api().await?;
    let result = api.list_page(page, page_size).await;

    match &result {
        Ok(page) => tracing::info!(
            "List successful: {} of {} products",
            page.products.len(),
            page.total_count
        ),
        Err(e) => tracing::error!("List failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("List failed: {}", e)))
}

/// Create a product on the remote API
#[server(CreateProduct, "/api")]
pub async fn create_product(name: String, last_name: String) -> Result<(), ServerFnError> {
    tracing::info!("Create request: name='{}'", name);

    let api = api().await?;
    let draft = ProductDraft { name, last_name };

    api.create(&draft).await.map_err(|e| {
        tracing::error!("Create failed: {}", e);
        ServerFnError::new(format!("Create failed: {}", e))
    })
}

/// Full-replace update of one product on the remote API
#[server(UpdateProduct, "/api")]
pub async fn update_product(id: i32, name: String, last_name: String) -> Result<(), ServerFnError> {
    tracing::info!("Update request: id={}", id);

    let api = api().await?;
    let draft = ProductDraft { name, last_name };

    api.update(id, &draft).await.map_err(|e| {
        tracing::error!("Update failed: {}", e);
        ServerFnError::new(format!("Update failed: {}", e))
    })
}

/// Delete one product on the remote API
#[server(DeleteProduct, "/api")]
pub async fn delete_product(id: i32) -> Result<(), ServerFnError> {
    tracing::info!("Delete request: id={}", id);

    let api = api().await?;

    api.delete(id).await.map_err(|e| {
        tracing::error!("Delete failed: {}", e);
        ServerFnError::new(format!("Delete failed: {}", e))
    })
}
