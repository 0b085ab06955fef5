// ============================================================================
// SESSION SERVICE - Lee `user` / `csrftoken` que la plantilla deja en window
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;
use crate::config::AppConfig;
use crate::dom::{document, window};
use crate::models::{SessionContext, UserState};
use crate::utils::cookie_value;

/// Construye el contexto de sesión a partir de los globals de la página
///
/// Sin `user` no hay forma de decidir qué mostrar: se devuelve error.
/// Sin `csrftoken` se intenta con la cookie; si tampoco está, token vacío.
pub fn read_session_context(config: &AppConfig) -> Result<SessionContext, String> {
    let user_label = read_global_string(&config.user_global)?
        .ok_or_else(|| format!("{} is not defined", config.user_global))?;

    let csrf_token = match read_global_string(&config.csrf_global)? {
        Some(token) => token,
        None => {
            let from_cookie = read_cookie(&config.csrf_cookie);
            if from_cookie.is_none() {
                log::warn!("⚠️ No hay token CSRF (ni global ni cookie), se envía vacío");
            }
            from_cookie.unwrap_or_default()
        }
    };

    Ok(session_from_values(&user_label, csrf_token, config))
}

/// Contexto a partir de valores explícitos (sin tocar window)
pub fn session_from_values(user_label: &str, csrf_token: String, config: &AppConfig) -> SessionContext {
    SessionContext::new(UserState::from_label(user_label, &config.anonymous_user), csrf_token)
}

fn read_global_string(name: &str) -> Result<Option<String>, String> {
    let win = window().ok_or_else(|| "No window".to_string())?;
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(name))
        .map_err(|e| format!("Error leyendo {}: {:?}", name, e))?;

    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    // Igual que `user == 'AnonymousUser'`: valores no-string se comparan por su texto
    Ok(Some(
        value
            .as_string()
            .or_else(|| value.as_f64().map(|n| n.to_string()))
            .or_else(|| value.as_bool().map(|b| b.to_string()))
            .unwrap_or_default(),
    ))
}

fn read_cookie(name: &str) -> Option<String> {
    let cookies = document()?.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_use_configured_sentinel() {
        let mut config = AppConfig::default();
        let session = session_from_values("AnonymousUser", "t".to_string(), &config);
        assert!(session.is_anonymous());

        config.anonymous_user = "Guest".to_string();
        let session = session_from_values("AnonymousUser", "t".to_string(), &config);
        assert_eq!(session.user, UserState::Authenticated("AnonymousUser".to_string()));
        assert_eq!(session.csrf_token, "t");
    }
}
