// ============================================================================
// CONFIG - Configuración en tiempo de compilación (option_env! + .env)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub log_level: String,
    pub anonymous_user: String,
    pub user_global: String,
    pub csrf_global: String,
    pub csrf_cookie: String,
    pub cart: CartConfig,
    pub countdown: CountdownConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
            anonymous_user: "AnonymousUser".to_string(),
            user_global: "user".to_string(),
            csrf_global: "csrftoken".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            cart: CartConfig::default(),
            countdown: CountdownConfig::default(),
        }
    }
}

/// Endpoints y contrato DOM de los botones del carrito
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    pub login_url: String,
    pub update_item_url: String,
    pub update_control_class: String,
    pub hidden_class: String,
    pub cart_icon_id: String,
    pub cart_total_id: String,
    pub product_data_key: String,
    pub action_data_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            login_url: "/login/".to_string(),
            update_item_url: "/update_item/".to_string(),
            update_control_class: "update-cart".to_string(),
            hidden_class: "hidden".to_string(),
            cart_icon_id: "cart-icon".to_string(),
            cart_total_id: "cart-total".to_string(),
            product_data_key: "product".to_string(),
            action_data_key: "action".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownConfig {
    pub event_box_id: String,
    pub countdown_box_id: String,
    pub tick_interval_ms: u32,
    pub ended_message: String,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            event_box_id: "event-box".to_string(),
            countdown_box_id: "countdown-box".to_string(),
            tick_interval_ms: 1000,
            ended_message: "Auction Ended".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let cart = defaults.cart;
        let countdown = defaults.countdown;

        Self {
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: env_or(option_env!("LOG_LEVEL"), &defaults.log_level),
            anonymous_user: env_or(option_env!("ANONYMOUS_USER"), &defaults.anonymous_user),
            user_global: env_or(option_env!("USER_GLOBAL"), &defaults.user_global),
            csrf_global: env_or(option_env!("CSRF_GLOBAL"), &defaults.csrf_global),
            csrf_cookie: env_or(option_env!("CSRF_COOKIE"), &defaults.csrf_cookie),
            cart: CartConfig {
                login_url: env_or(option_env!("LOGIN_URL"), &cart.login_url),
                update_item_url: env_or(option_env!("UPDATE_ITEM_URL"), &cart.update_item_url),
                update_control_class: env_or(option_env!("UPDATE_CONTROL_CLASS"), &cart.update_control_class),
                hidden_class: env_or(option_env!("HIDDEN_CLASS"), &cart.hidden_class),
                cart_icon_id: env_or(option_env!("CART_ICON_ID"), &cart.cart_icon_id),
                cart_total_id: env_or(option_env!("CART_TOTAL_ID"), &cart.cart_total_id),
                product_data_key: env_or(option_env!("PRODUCT_DATA_KEY"), &cart.product_data_key),
                action_data_key: env_or(option_env!("ACTION_DATA_KEY"), &cart.action_data_key),
            },
            countdown: CountdownConfig {
                event_box_id: env_or(option_env!("EVENT_BOX_ID"), &countdown.event_box_id),
                countdown_box_id: env_or(option_env!("COUNTDOWN_BOX_ID"), &countdown.countdown_box_id),
                tick_interval_ms: option_env!("TICK_INTERVAL_MS")
                    .and_then(|v| v.parse().ok())
                    .filter(|ms| *ms > 0)
                    .unwrap_or(countdown.tick_interval_ms),
                ended_message: env_or(option_env!("ENDED_MESSAGE"), &countdown.ended_message),
            },
        }
    }

    /// Nivel de log para wasm_logger (valores desconocidos -> Info)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Valor de build o default; un valor en blanco cuenta como ausente (build.rs lo avisa)
fn env_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
