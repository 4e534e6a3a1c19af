// Console logging gated on `window.ENV.DEBUG`.
macro_rules! debug_log {
    ($($t:tt)*) => {
        if $crate::config::debug_enabled() {
            leptos::logging::log!($($t)*);
        }
    };
}

mod app;
mod comments;
mod components;
mod config;
mod confirm;
mod error;
mod models;
mod pages;
mod preview;
mod state;

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
