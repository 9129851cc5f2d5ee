//! Browser entry point. Build with `trunk serve --features csr`.

#[cfg(feature = "csr")]
fn main() {
    let config = memberfund::config::get();
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    log::info!("memberfund client starting (api base {})", config.api_base);
    leptos::mount::mount_to_body(memberfund::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
