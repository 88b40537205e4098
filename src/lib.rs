// lib.rs - Root module for the product_admin library
//
// The whole application lives under web_app; this file only wires up the
// WASM hydration entry point used by cargo-leptos.

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// Hydration entry point, called from the generated JS shim
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
