//! WebAssembly entry point for the docsite frontend.
//!
//! Hydrates the server-rendered header and pages so that the theme toggle,
//! the language dropdown and client-side navigation become interactive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client-side.
///
/// Initializes `console_log` and `console_error_panic_hook`, then hydrates
/// the body with `app::component`.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating docsite");
    leptos::mount::hydrate_body(component);
}
