//! Browser environment access via `web-sys`

use inboxhunter_core::{
    detect_os, DetectionProfile, EnvironmentSignals, Error, PlatformClass, Result, ThemeStorage,
};
use wasm_bindgen::JsCast;

/// `UNMASKED_RENDERER_WEBGL` from the `WEBGL_debug_renderer_info` extension
const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;

pub fn environment_signals() -> EnvironmentSignals {
    let Some(window) = web_sys::window() else {
        return EnvironmentSignals::default();
    };
    let navigator = window.navigator();
    EnvironmentSignals::new(
        navigator.user_agent().unwrap_or_default(),
        navigator.platform().unwrap_or_default(),
    )
}

pub fn detect_platform(profile: DetectionProfile) -> PlatformClass {
    detect_os(&environment_signals(), profile, webgl_renderer)
}

/// Renderer string of a throwaway WebGL context, if the browser exposes it
fn webgl_renderer() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()?;
    let gl = canvas
        .get_context("webgl")
        .ok()??
        .dyn_into::<web_sys::WebGlRenderingContext>()
        .ok()?;
    gl.get_extension("WEBGL_debug_renderer_info").ok()??;
    gl.get_parameter(UNMASKED_RENDERER_WEBGL).ok()?.as_string()
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// `None` when local storage is disabled (private mode, blocked cookies)
    pub fn open() -> Option<Self> {
        match local_storage() {
            Ok(_) => Some(Self),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }
}

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| Error::storage("no window"))?
        .local_storage()
        .map_err(|e| Error::storage(format!("{e:?}")))?
        .ok_or_else(|| Error::storage("localStorage is disabled"))
}

impl ThemeStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| Error::storage(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::storage(format!("{e:?}")))
    }
}
