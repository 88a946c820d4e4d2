use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Reads window.__HRMS_ENV = { API_BASE_URL: "..." } injected by env.js.
fn get_from_env_js() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &"__HRMS_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
        val.and_then(|v| v.as_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Reads window.__HRMS_CONFIG = { api_base_url: "..." }.
fn get_from_window_config() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &"__HRMS_CONFIG".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        js_sys::Reflect::get(&obj, &"api_base_url".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn snapshot_from_globals() -> Option<String> {
    if let Some(env_url) = get_from_env_js() {
        return Some(env_url);
    }
    get_from_window_config()
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

/// Mirrors a fetched config back onto the window so later lookups skip
/// the network round trip.
fn write_window_config(cfg: &RuntimeConfig) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(url) = &cfg.api_base_url else {
            return;
        };
        let w = match web_sys::window() {
            Some(win) => win,
            None => return,
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__HRMS_CONFIG".into(), &obj);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = cfg;
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolution order: cached value, window globals, ./config.json, then
/// the compiled-in default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    log::info!("No runtime config found, using default API base URL");
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
