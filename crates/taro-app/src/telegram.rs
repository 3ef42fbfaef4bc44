// crates/taro-app/src/telegram.rs
// Bridge to the hosting Telegram client (window.Telegram.WebApp)

use js_sys::{Function, Reflect};
use taro_types::WebAppData;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::error::{AppError, Result};

/// Global the server-rendered menu cards call from `onclick`
pub const CHOICE_HANDLER_NAME: &str = "choise_type_taro";

/// Handle to `window.Telegram.WebApp`
#[derive(Clone)]
pub struct WebApp {
    inner: JsValue,
}

impl WebApp {
    /// Resolve the host object; `None` outside the Telegram client
    pub fn from_window(window: &Window) -> Option<Self> {
        let telegram = Reflect::get(window, &JsValue::from_str("Telegram")).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let inner = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        if inner.is_undefined() || inner.is_null() {
            return None;
        }
        Some(Self { inner })
    }

    /// Send a payload to the bot; the client closes the web app afterwards
    pub fn send(&self, data: &WebAppData) -> Result<()> {
        let json = serde_json::to_string(data)?;
        let send_data = Reflect::get(&self.inner, &JsValue::from_str("sendData"))?
            .dyn_into::<Function>()
            .map_err(|_| AppError::Unavailable("Telegram.WebApp.sendData"))?;

        send_data.call1(&self.inner, &JsValue::from_str(&json))?;
        log::info!("Sent web app data: {}", json);
        Ok(())
    }
}

/// Expose `choise_type_taro(name)` on `window` for the menu cards
pub fn install_choice_handler(window: &Window, web_app: WebApp) -> Result<()> {
    let handler = Closure::wrap(Box::new(move |name: String| {
        log::debug!("Reading type chosen: {}", name);
        if let Err(e) = web_app.send(&WebAppData::choise_type_taro(name)) {
            log::error!("Failed to send choice: {}", e);
        }
    }) as Box<dyn FnMut(String)>);

    Reflect::set(window, &JsValue::from_str(CHOICE_HANDLER_NAME), handler.as_ref())?;
    handler.forget();
    Ok(())
}
