//! # client
//!
//! Leptos + WASM page widgets for the TechHelpSeniors static site.
//!
//! Two unrelated widgets mount once per page load: the navigation dock with
//! hover magnification, and the support chat popup with canned replies.
//! Browser glue is gated behind the `csr` feature; state and helper modules
//! compile natively so their behavior is unit tested without a browser.

pub mod components;
pub mod mount;
pub mod state;
pub mod util;

/// WASM entry point. Runs once when the module is instantiated by the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    mount::mount_widgets();
}
