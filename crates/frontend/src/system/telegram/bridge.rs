//! Мост к хост-приложению: `window.Telegram.WebApp`.
//!
//! Объект моста читается динамически через `Reflect`: вне Telegram его
//! просто нет, и витрина должна подниматься без него.

use contracts::system::telegram::TelegramUser;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn web_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = Reflect::get(window.as_ref(), &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }
    let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if web_app.is_undefined() || web_app.is_null() {
        return None;
    }
    Some(web_app)
}

fn call_signal(target: &JsValue, name: &str) {
    let Ok(member) = Reflect::get(target, &JsValue::from_str(name)) else {
        return;
    };
    if let Ok(func) = member.dyn_into::<Function>() {
        if func.call0(target).is_err() {
            log::warn!("host bridge: '{name}' signal failed");
        }
    }
}

/// Стартовая последовательность: сигналы `ready`/`expand` один раз и
/// чтение профиля из `initDataUnsafe.user`. Вне хоста возвращает `None`.
pub fn init() -> Option<TelegramUser> {
    let web_app = web_app()?;
    call_signal(&web_app, "ready");
    call_signal(&web_app, "expand");

    let init_data = Reflect::get(&web_app, &JsValue::from_str("initDataUnsafe")).ok()?;
    let user = Reflect::get(&init_data, &JsValue::from_str("user")).ok()?;
    if user.is_undefined() || user.is_null() {
        return None;
    }
    serde_wasm_bindgen::from_value(user)
        .map_err(|err| log::warn!("host bridge: user profile is malformed: {err}"))
        .ok()
}
