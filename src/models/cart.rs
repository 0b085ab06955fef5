use serde::{Deserialize, Serialize};

/// Acción de un botón "update-cart" (`data-action`)
///
/// El servidor decide qué significa cada token; aquí solo se tipan los dos
/// conocidos y cualquier otro valor viaja tal cual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CartAction {
    Add,
    Remove,
    Other(String),
}

impl CartAction {
    pub fn as_str(&self) -> &str {
        match self {
            CartAction::Add => "add",
            CartAction::Remove => "remove",
            CartAction::Other(token) => token,
        }
    }
}

impl From<String> for CartAction {
    fn from(token: String) -> Self {
        match token.as_str() {
            "add" => CartAction::Add,
            "remove" => CartAction::Remove,
            _ => CartAction::Other(token),
        }
    }
}

impl From<&str> for CartAction {
    fn from(token: &str) -> Self {
        CartAction::from(token.to_string())
    }
}

impl From<CartAction> for String {
    fn from(action: CartAction) -> Self {
        match action {
            CartAction::Other(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

/// Datos leídos de un botón en el momento del click
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateControlData {
    pub product_id: Option<String>,
    pub action: Option<CartAction>,
}

/// Body de `POST /update_item/`
///
/// Un atributo ausente no se serializa (ni siquiera como `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(rename = "productId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<CartAction>,
}

impl From<UpdateControlData> for UpdateItemRequest {
    fn from(data: UpdateControlData) -> Self {
        Self {
            product_id: data.product_id,
            action: data.action,
        }
    }
}

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Request ya armado, listo para el transporte HTTP
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl OutgoingRequest {
    /// POST con `Content-Type: application/json` y `X-CSRFToken`
    pub fn post_json(url: &str, csrf_token: &str, body: Option<String>) -> Self {
        Self {
            method: "POST",
            url: url.to_string(),
            headers: vec![
                (CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string()),
                (CSRF_HEADER.to_string(), csrf_token.to_string()),
            ],
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
