// ============================================================================
// STOREFRONT WIDGETS - Carrito + countdown de subastas (Rust + WASM)
// ============================================================================
// - Models: datos (requests, sesión, tiempo restante)
// - Services: navegador (fetch, location, reloj, intervalos, globals)
// - ViewModels: lógica del carrito y del countdown, sin DOM directo
// - DOM: helpers y adaptadores de web_sys para los viewmodels
// Cada página llama solo a los init_* que necesita.
// ============================================================================

pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{
    get_element_by_id, get_elements_by_class_name, require_element_by_id, text_content, EventListener,
};
use crate::models::SessionContext;
use crate::services::{
    read_session_context, session_from_values, ApiClient, IntervalScheduler, JsClock, LocalSpawner,
    LocationReloader,
};
use crate::utils::parse_event_target;
use crate::viewmodels::{CartBinding, CartElements, CartViewModel, CountdownViewModel};

type BrowserCountdown = CountdownViewModel<JsClock, IntervalScheduler, Element>;

// Bindings vivos durante toda la vista de página
thread_local! {
    static CART: RefCell<Option<CartBinding<EventListener>>> = RefCell::new(None);
    static COUNTDOWN: RefCell<Option<Rc<BrowserCountdown>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Storefront widgets cargados");

    Ok(())
}

/// Botones del carrito usando `user` / `csrftoken` de la página
#[wasm_bindgen]
pub fn init_cart_controls() -> Result<(), JsValue> {
    let session = read_session_context(&CONFIG).map_err(|e| JsValue::from_str(&e))?;
    bind_cart(session)
}

/// Botones del carrito con usuario y token explícitos
#[wasm_bindgen]
pub fn init_cart_controls_with(user: String, csrf_token: String) -> Result<(), JsValue> {
    bind_cart(session_from_values(&user, csrf_token, &CONFIG))
}

fn bind_cart(session: SessionContext) -> Result<(), JsValue> {
    let cart = &CONFIG.cart;
    let elements = CartElements {
        controls: get_elements_by_class_name(&cart.update_control_class)?,
        cart_icon: get_element_by_id(&cart.cart_icon_id),
        cart_total: get_element_by_id(&cart.cart_total_id),
    };

    let vm = CartViewModel::new(
        session,
        cart.clone(),
        CONFIG.anonymous_user.clone(),
        ApiClient::new(),
        LocationReloader,
        LocalSpawner,
    );
    let binding = vm.bind(elements).map_err(|e| JsValue::from_str(&e))?;

    // Un segundo init reemplaza (y desregistra) los listeners anteriores
    CART.with(|slot| *slot.borrow_mut() = Some(binding));
    Ok(())
}

/// Countdown leyendo el target del event-box
#[wasm_bindgen]
pub fn init_countdown() -> Result<(), JsValue> {
    let event_box = require_element_by_id(&CONFIG.countdown.event_box_id)?;
    start_countdown(&text_content(&event_box))
}

/// Countdown con el texto del target explícito
#[wasm_bindgen]
pub fn init_countdown_with(target_text: String) -> Result<(), JsValue> {
    start_countdown(&target_text)
}

fn start_countdown(target_text: &str) -> Result<(), JsValue> {
    let countdown = &CONFIG.countdown;
    let display = require_element_by_id(&countdown.countdown_box_id)?;

    let target_ms = parse_event_target(target_text).unwrap_or_else(|e| {
        log::warn!("⚠️ Fecha de fin inválida ({}), el countdown termina en el primer tick", e);
        f64::NAN
    });

    let vm = CountdownViewModel::new(target_ms, countdown.clone(), JsClock, IntervalScheduler, display);
    vm.start();

    COUNTDOWN.with(|slot| *slot.borrow_mut() = Some(vm));
    Ok(())
}
