//! Agriboard Dashboard
//!
//! Smart agriculture dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It loads the JSON datasets produced by `agriboard generate` over HTTP and
//! keeps every chart sized to its panel through the `agriboard::resize` core.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod web;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
