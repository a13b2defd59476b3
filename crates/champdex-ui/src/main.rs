#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Champdex entry point: mounts the app in the browser, explains itself elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() {
    champdex_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn native_notice() -> String {
    let catalog = champdex_ui::core::config::CatalogConfig::default().catalog_url();
    format!(
        "champdex-ui runs in the browser; serve it with `trunk serve` from crates/champdex-ui.\n\
         default catalog: {catalog}\n"
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().lock().write_all(native_notice().as_bytes())
}
