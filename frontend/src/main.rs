#[cfg(target_arch = "wasm32")]
fn main() {
    use hrms_frontend::{config, App};
    use leptos::*;
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting HRMS frontend: initializing runtime config");

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(App);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
