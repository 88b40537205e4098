// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend, backend, and the remote Product API.
// Field names are renamed to camelCase on the wire to match the API
// contract (`lastName`, `totalCount`).

use serde::{Deserialize, Serialize};

/// A product record as returned by the remote API
///
/// `id` is assigned by the server on create and never by this client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub last_name: String,
}

/// Request body for create and update calls
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub last_name: String,
}

/// One server-returned page of products
///
/// `total_count` is the number of products across ALL pages, not the
/// length of `products`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_count: i64,
}
