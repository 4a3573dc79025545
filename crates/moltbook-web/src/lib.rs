//! Moltbook Dashboard Frontend
//!
//! Leptos-based WASM frontend: three routed views over the chain services,
//! plus the EIP-1193 bridge to the injected browser wallet.

mod app;
mod components;
mod eip1193;
mod pages;
mod session;

pub use app::App;
pub use eip1193::Eip1193;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
