//! Binary entrypoint for the browser-hosted `site` application.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "RetroOS runs in the browser. Build `site_app` for wasm32 with the `csr` feature and serve it with trunk."
    );
}
